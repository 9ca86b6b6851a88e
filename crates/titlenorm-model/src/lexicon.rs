//! Built-in lookup tables for the normalisation pipeline.
//!
//! Every table is an insertion-ordered constant; the order is the
//! substitution order, so longer or more specific phrases must be
//! listed before shorter ones when one could shadow the other.

use std::collections::HashSet;

/// Australian state and territory abbreviations, abbreviation first.
const STATES: &[(&str, &str)] = &[
    ("nsw", "new south wales"),
    ("vic", "victoria"),
    ("tas", "tasmania"),
    ("sa", "south australia"),
    ("wa", "western australia"),
    ("act", "australian capital territory"),
    ("nt", "northern territory"),
];

/// Canonical city name to the short forms seen in ticketing feeds.
const CITIES: &[(&str, &[&str])] = &[
    ("sydney", &["syd"]),
    ("melbourne", &["mel", "melb"]),
    ("brisbane", &["bris"]),
    ("gold coast", &["gc"]),
    ("adelaide", &["adel"]),
    ("canberra", &["canb"]),
];

/// Canonical short country name to its longer or alternate names.
const COUNTRIES: &[(&str, &[&str])] = &[
    ("usa", &["united states of america", "united states"]),
    ("uk", &["united kingdom"]),
    ("russia", &["russian federation"]),
    ("taiwan", &["chinese taipei"]),
    ("korea", &["republic of korea"]),
    ("netherlands", &["holland"]),
    ("china", &["prc", "peoples republic of china"]),
    ("macedonia", &["fyrom"]),
];

/// Canonical sporting term to its single common abbreviation.
const SPORT_TERMS: &[(&str, &str)] = &[
    ("united", "utd"),
    ("international", "intl"),
    ("association", "assoc"),
    ("football club", "fc"),
];

/// Canonical venue phrase to its abbreviations.
const VENUES: &[(&str, &[&str])] = &[
    ("sydney cricket ground", &["scg"]),
    ("melbourne cricket ground", &["mcg"]),
    ("entertainment centre", &["ent centre", "ent cent"]),
    ("convention centre", &["conv centre", "conv cent"]),
    ("showgrounds", &["showground"]),
];

/// Fixed English function-word list. Embedded rather than pulled from a
/// third-party list so the output never drifts between releases.
/// Number words are deliberately absent: spelled-out digits must
/// survive re-normalisation.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "although", "am", "among",
    "amongst", "an", "and", "any", "are", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
    "during", "each", "else", "ever", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "hence", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "however", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
    "my", "myself", "never", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other",
    "ought", "our", "ours", "ourselves", "out", "over", "own", "per", "same", "she", "should",
    "since", "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "therefore", "these", "they", "this", "those", "though", "through", "thus",
    "to", "too", "under", "until", "up", "upon", "very", "via", "was", "we", "were", "what",
    "when", "where", "whereas", "whether", "which", "while", "who", "whom", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Read-only lookup tables shared by all pipeline stages.
///
/// Construct once per `Normaliser`; everything inside is immutable, so
/// a `Lexicon` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<&'static str>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// State table: `(abbreviation, full name)` in substitution order.
    pub fn states(&self) -> &'static [(&'static str, &'static str)] {
        STATES
    }

    /// City table: `(canonical name, aliases)` in substitution order.
    pub fn cities(&self) -> &'static [(&'static str, &'static [&'static str])] {
        CITIES
    }

    /// Country table: `(canonical short name, aliases)` in substitution order.
    pub fn countries(&self) -> &'static [(&'static str, &'static [&'static str])] {
        COUNTRIES
    }

    /// Sport-term table: `(canonical term, abbreviation)`.
    pub fn sport_terms(&self) -> &'static [(&'static str, &'static str)] {
        SPORT_TERMS
    }

    /// Venue table: `(canonical phrase, abbreviations)` in substitution order.
    pub fn venues(&self) -> &'static [(&'static str, &'static [&'static str])] {
        VENUES
    }

    /// Full stopword list, for display purposes.
    pub fn stopwords(&self) -> &'static [&'static str] {
        STOPWORDS
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_keep_insertion_order() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.states()[0], ("nsw", "new south wales"));
        assert_eq!(lexicon.cities()[0].0, "sydney");
        assert_eq!(
            lexicon.countries()[0].1,
            &["united states of america", "united states"][..]
        );
    }

    #[test]
    fn state_table_has_seven_entries() {
        assert_eq!(Lexicon::new().states().len(), 7);
    }

    #[test]
    fn specific_venue_phrases_come_first() {
        let venues = Lexicon::new().venues();
        let scg = venues
            .iter()
            .position(|(canonical, _)| *canonical == "sydney cricket ground")
            .expect("scg entry");
        let generic = venues
            .iter()
            .position(|(canonical, _)| *canonical == "entertainment centre")
            .expect("entertainment centre entry");
        assert!(scg < generic);
    }

    #[test]
    fn stopword_membership() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_stopword("of"));
        assert!(!lexicon.is_stopword("sydney"));
        assert!(!lexicon.is_stopword("four"));
    }
}
