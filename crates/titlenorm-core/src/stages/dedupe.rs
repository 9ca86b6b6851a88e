//! Repeated-phrase and duplicate-word collapsing.

use std::collections::HashSet;

/// Collapse repeated contiguous word phrases, keeping the first
/// occurrence of each. Window sizes run from `max_window` down to 2 so
/// a long duplicated phrase collapses before its sub-phrases are
/// considered. Each pass runs to a fixed point; every removal strictly
/// shrinks the token list, so termination is guaranteed.
pub(crate) fn collapse_repeated_phrases(text: &str, max_window: usize) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    for window in (2..=max_window).rev() {
        collapse_window(&mut tokens, window);
    }
    tokens.join(" ")
}

fn collapse_window(tokens: &mut Vec<&str>, window: usize) {
    while let Some(start) = find_repeat(tokens, window) {
        tokens.drain(start..start + window);
    }
}

/// Find a later, non-overlapping occurrence of any `window`-sized
/// phrase and return its start index.
fn find_repeat(tokens: &[&str], window: usize) -> Option<usize> {
    if tokens.len() < window * 2 {
        return None;
    }
    for first in 0..=tokens.len() - 2 * window {
        let phrase = &tokens[first..first + window];
        let mut second = first + window;
        while second + window <= tokens.len() {
            if &tokens[second..second + window] == phrase {
                return Some(second);
            }
            second += 1;
        }
    }
    None
}

/// Keep only the first occurrence of each distinct word, preserving
/// first-seen order.
pub(crate) fn collapse_duplicate_words(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|word| seen.insert(*word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicated_phrase_collapses_to_one() {
        assert_eq!(
            collapse_repeated_phrases("sydney cricket ground sydney cricket ground tickets", 4),
            "sydney cricket ground tickets"
        );
    }

    #[test]
    fn long_windows_collapse_before_short_ones() {
        assert_eq!(
            collapse_repeated_phrases("a b c d a b c d a b", 4),
            "a b c d"
        );
    }

    #[test]
    fn separated_repeats_also_collapse() {
        assert_eq!(
            collapse_repeated_phrases("world tour live world tour", 4),
            "world tour live"
        );
    }

    #[test]
    fn no_repeats_is_a_no_op() {
        assert_eq!(collapse_repeated_phrases("one off show", 4), "one off show");
    }

    #[test]
    fn single_words_are_not_windows() {
        // Window sizes stop at 2; bare word repeats are the duplicate-word
        // stage's job.
        assert_eq!(collapse_repeated_phrases("usa usa team", 4), "usa usa team");
    }

    #[test]
    fn first_occurrence_of_each_word_wins() {
        assert_eq!(collapse_duplicate_words("usa usa team"), "usa team");
        assert_eq!(collapse_duplicate_words("b a b c a"), "b a c");
    }
}
