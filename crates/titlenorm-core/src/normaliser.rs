//! The normalisation pipeline.

use regex::Regex;
use tracing::{debug, trace};

use titlenorm_model::{Lexicon, NormaliseError, NormaliserOptions, Result};

use crate::stages::aliases::{
    AliasMatcher, compile_city_aliases, compile_country_aliases, compile_domain_aliases,
};
use crate::stages::cleanup::{
    collapse_whitespace, remove_stopwords, strip_non_alphanumeric, strip_punctuation,
};
use crate::stages::dedupe::{collapse_duplicate_words, collapse_repeated_phrases};
use crate::stages::numbers::{digits_to_words, label_years};

/// Normalises free-form titles into a canonical, single-spaced token
/// form.
///
/// All configuration and lexicon state is compiled once in [`new`] and
/// read-only afterwards, so a `Normaliser` can be shared across
/// threads and every call to [`normalise`] is independent.
///
/// [`new`]: Normaliser::new
/// [`normalise`]: Normaliser::normalise
///
/// # Example
///
/// ```
/// use titlenorm_core::Normaliser;
///
/// let normaliser = Normaliser::with_defaults()?;
/// let out = normaliser.normalise("Syd Ent Centre!")?;
/// assert_eq!(out, "sydney entertainment centre");
/// # Ok::<(), titlenorm_core::NormaliseError>(())
/// ```
#[derive(Debug)]
pub struct Normaliser {
    options: NormaliserOptions,
    lexicon: Lexicon,
    domain_aliases: Vec<AliasMatcher>,
    city_aliases: Vec<AliasMatcher>,
    country_aliases: Vec<AliasMatcher>,
    year_pattern: Regex,
}

impl Normaliser {
    /// Build a normaliser, validating the options and compiling every
    /// alias matcher up front.
    pub fn new(options: NormaliserOptions) -> Result<Self> {
        options.validate()?;
        let lexicon = Lexicon::new();
        let domain_aliases = compile_domain_aliases(&lexicon)?;
        let city_aliases = compile_city_aliases(&lexicon)?;
        let country_aliases = compile_country_aliases(&lexicon)?;
        let year_pattern = Regex::new(r"\b\d{4}\b")?;
        Ok(Self {
            options,
            lexicon,
            domain_aliases,
            city_aliases,
            country_aliases,
            year_pattern,
        })
    }

    /// Build a normaliser with the default options.
    pub fn with_defaults() -> Result<Self> {
        Self::new(NormaliserOptions::default())
    }

    pub fn options(&self) -> &NormaliserOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Run the pipeline over `text`.
    ///
    /// Returns the canonical form: words separated by exactly one
    /// space, no leading or trailing whitespace, with every enabled
    /// stage applied in fixed order.
    ///
    /// # Errors
    ///
    /// [`NormaliseError::InvalidInput`] when `text` is empty. Per-stage
    /// non-matches (a number that is not a year, a token that will not
    /// convert) are skipped silently, never surfaced.
    pub fn normalise(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Err(NormaliseError::InvalidInput);
        }
        let mut current = text.to_string();

        if self.options.lowercase {
            current = current.to_lowercase();
            self.log_stage("lowercase", &current);
        }
        if self.options.remove_punctuation {
            current = strip_punctuation(&current);
            self.log_stage("strip_punctuation", &current);
        }
        if self.options.remove_non_alphanumeric {
            current = strip_non_alphanumeric(&current);
            self.log_stage("strip_non_alphanumeric", &current);
        }
        if self.options.remove_stopwords {
            current = remove_stopwords(&current, &self.lexicon);
            self.log_stage("remove_stopwords", &current);
        }

        // Sport and venue aliases are not toggleable: the geographic
        // stages below depend on the expanded phrases.
        for matcher in &self.domain_aliases {
            current = matcher.apply(&current);
        }
        self.log_stage("domain_aliases", &current);

        if self.options.shorten_state_names {
            // Plain substring replacement, not word-anchored: full
            // state names embedded in compound phrases shorten too.
            for (abbreviation, full_name) in self.lexicon.states() {
                current = current.replace(full_name, abbreviation);
            }
            self.log_stage("shorten_state_names", &current);
        }
        if self.options.expand_city_aliases {
            for matcher in &self.city_aliases {
                current = matcher.apply(&current);
            }
            self.log_stage("expand_city_aliases", &current);
        }
        if self.options.disambiguate_country_names {
            for matcher in &self.country_aliases {
                current = matcher.apply(&current);
            }
            self.log_stage("disambiguate_country_names", &current);
        }
        if self.options.digits_to_words {
            current = digits_to_words(&current);
            self.log_stage("digits_to_words", &current);
        }
        if self.options.year_to_label {
            current = label_years(&current, &self.year_pattern);
            self.log_stage("year_to_label", &current);
        }
        if self.options.collapse_repeated_substrings {
            current = collapse_repeated_phrases(&current, self.options.max_duplicate_window);
            self.log_stage("collapse_repeated_substrings", &current);
        }
        if self.options.collapse_duplicate_words {
            current = collapse_duplicate_words(&current);
            self.log_stage("collapse_duplicate_words", &current);
        }

        // Output guarantee, independent of which stages ran.
        let output = collapse_whitespace(&current);
        debug!(input_len = text.len(), output_len = output.len(), "normalised");
        Ok(output)
    }

    fn log_stage(&self, stage: &str, text: &str) {
        debug!(stage, "stage applied");
        trace!(stage, text, "stage output");
    }
}
