use serde::{Deserialize, Serialize};

use crate::error::{NormaliseError, Result};

/// Options for the normalisation pipeline.
///
/// Every flag toggles one stage; the stages always run in the same
/// fixed order. Flags are fixed at construction of a `Normaliser` and
/// immutable afterwards.
///
/// Defaults enable the cleanup stages and disable the destructive ones
/// (digits-to-words, duplicate-word collapsing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormaliserOptions {
    /// Fold all characters to lowercase.
    pub lowercase: bool,
    /// Replace punctuation with single spaces.
    pub remove_punctuation: bool,
    /// Drop characters that are neither alphanumeric nor whitespace.
    pub remove_non_alphanumeric: bool,
    /// Drop tokens that are English stopwords.
    pub remove_stopwords: bool,
    /// Replace full state names with their abbreviations.
    pub shorten_state_names: bool,
    /// Replace city abbreviations with the full city name.
    pub expand_city_aliases: bool,
    /// Replace long country names with the canonical short form.
    pub disambiguate_country_names: bool,
    /// Spell out all-digit tokens as cardinal words.
    pub digits_to_words: bool,
    /// Replace standalone 4-digit years with a sentinel token.
    pub year_to_label: bool,
    /// Collapse repeated multi-word phrases down to one occurrence.
    pub collapse_repeated_substrings: bool,
    /// Keep only the first occurrence of each distinct word.
    pub collapse_duplicate_words: bool,
    /// Longest repeated-phrase window considered, in words. Must be at
    /// least 1.
    pub max_duplicate_window: usize,
}

impl Default for NormaliserOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_punctuation: true,
            remove_non_alphanumeric: true,
            remove_stopwords: true,
            shorten_state_names: true,
            expand_city_aliases: true,
            disambiguate_country_names: true,
            digits_to_words: false,
            year_to_label: true,
            collapse_repeated_substrings: true,
            collapse_duplicate_words: false,
            max_duplicate_window: 4,
        }
    }
}

impl NormaliserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    #[must_use]
    pub fn with_remove_punctuation(mut self, enable: bool) -> Self {
        self.remove_punctuation = enable;
        self
    }

    #[must_use]
    pub fn with_remove_non_alphanumeric(mut self, enable: bool) -> Self {
        self.remove_non_alphanumeric = enable;
        self
    }

    #[must_use]
    pub fn with_remove_stopwords(mut self, enable: bool) -> Self {
        self.remove_stopwords = enable;
        self
    }

    #[must_use]
    pub fn with_shorten_state_names(mut self, enable: bool) -> Self {
        self.shorten_state_names = enable;
        self
    }

    #[must_use]
    pub fn with_expand_city_aliases(mut self, enable: bool) -> Self {
        self.expand_city_aliases = enable;
        self
    }

    #[must_use]
    pub fn with_disambiguate_country_names(mut self, enable: bool) -> Self {
        self.disambiguate_country_names = enable;
        self
    }

    #[must_use]
    pub fn with_digits_to_words(mut self, enable: bool) -> Self {
        self.digits_to_words = enable;
        self
    }

    #[must_use]
    pub fn with_year_to_label(mut self, enable: bool) -> Self {
        self.year_to_label = enable;
        self
    }

    #[must_use]
    pub fn with_collapse_repeated_substrings(mut self, enable: bool) -> Self {
        self.collapse_repeated_substrings = enable;
        self
    }

    #[must_use]
    pub fn with_collapse_duplicate_words(mut self, enable: bool) -> Self {
        self.collapse_duplicate_words = enable;
        self
    }

    #[must_use]
    pub fn with_max_duplicate_window(mut self, window: usize) -> Self {
        self.max_duplicate_window = window;
        self
    }

    /// Check invariants that the flag types cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.max_duplicate_window == 0 {
            return Err(NormaliseError::InvalidOptions(
                "max_duplicate_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
