//! Character- and token-level cleanup stages.

use titlenorm_model::Lexicon;

/// Rejoin on single spaces, trimming leading and trailing whitespace.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace every ASCII punctuation character with a space, then
/// collapse whitespace. Punctuation always becomes a separator so the
/// words on either side never merge.
pub(crate) fn strip_punctuation(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|ch| if ch.is_ascii_punctuation() { ' ' } else { ch })
        .collect();
    collapse_whitespace(&spaced)
}

/// Drop every character that is neither alphanumeric nor whitespace.
/// Catches stray symbols the punctuation pass does not cover, such as
/// non-ASCII marks.
pub(crate) fn strip_non_alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .collect()
}

/// Drop tokens whose punctuation-stripped lowercase form is a stopword.
pub(crate) fn remove_stopwords(text: &str, lexicon: &Lexicon) -> String {
    text.split_whitespace()
        .filter(|word| {
            let key = strip_punctuation(&word.to_lowercase());
            !lexicon.is_stopword(&key)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
