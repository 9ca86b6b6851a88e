//! Alias-to-canonical substitution.
//!
//! All matchers here are case-insensitive and anchored on word
//! boundaries, so an alias never matches inside a longer word. State
//! shortening is the one deliberate exception and lives in the
//! pipeline itself as a plain substring replacement.

use regex::{NoExpand, Regex};
use titlenorm_model::{Lexicon, Result};

/// One compiled alias matcher: whole-word (or whole-phrase) occurrences
/// of the alias are rewritten to the canonical form.
#[derive(Debug)]
pub(crate) struct AliasMatcher {
    pattern: Regex,
    canonical: String,
}

impl AliasMatcher {
    fn new(alias: &str, canonical: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(alias)))?;
        Ok(Self {
            pattern,
            canonical: canonical.to_string(),
        })
    }

    pub(crate) fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.canonical))
            .into_owned()
    }
}

/// Sport-term and venue matchers, in table order: sport terms first,
/// then venue phrases. These run ahead of the geographic stages because
/// expanded venue phrases can contain city names those stages rely on.
pub(crate) fn compile_domain_aliases(lexicon: &Lexicon) -> Result<Vec<AliasMatcher>> {
    let mut matchers = Vec::new();
    for (canonical, alias) in lexicon.sport_terms() {
        matchers.push(AliasMatcher::new(alias, canonical)?);
    }
    for (canonical, aliases) in lexicon.venues() {
        for alias in *aliases {
            matchers.push(AliasMatcher::new(alias, canonical)?);
        }
    }
    Ok(matchers)
}

/// City short forms to the full city name.
pub(crate) fn compile_city_aliases(lexicon: &Lexicon) -> Result<Vec<AliasMatcher>> {
    let mut matchers = Vec::new();
    for (canonical, aliases) in lexicon.cities() {
        for alias in *aliases {
            matchers.push(AliasMatcher::new(alias, canonical)?);
        }
    }
    Ok(matchers)
}

/// Country alias phrases to the canonical short name.
///
/// Each alias gets a second matcher with the alias's own stopwords
/// stripped, so "united states of america" still resolves after the
/// stopword stage has removed "of" from the text. That second matcher
/// is deliberate, not redundant.
pub(crate) fn compile_country_aliases(lexicon: &Lexicon) -> Result<Vec<AliasMatcher>> {
    let mut matchers = Vec::new();
    for (canonical, aliases) in lexicon.countries() {
        for alias in *aliases {
            matchers.push(AliasMatcher::new(alias, canonical)?);
            let stripped = strip_alias_stopwords(alias, lexicon);
            if !stripped.is_empty() && stripped != *alias {
                matchers.push(AliasMatcher::new(&stripped, canonical)?);
            }
        }
    }
    Ok(matchers)
}

fn strip_alias_stopwords(alias: &str, lexicon: &Lexicon) -> String {
    alias
        .split_whitespace()
        .filter(|word| !lexicon.is_stopword(word))
        .collect::<Vec<_>>()
        .join(" ")
}
