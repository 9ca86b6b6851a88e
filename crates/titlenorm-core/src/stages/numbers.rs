//! Digit handling: cardinal spelling and year labelling.

use num2words::Num2Words;
use regex::Regex;

/// Marker substituted for recognised years so titles that differ only
/// in the year compare as equal.
pub const YEAR_SENTINEL: &str = "!YEAR!";

/// Years outside this range are treated as ordinary numbers (street
/// numbers, prices) and left for the digits stage.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=2999;

/// Spell out every all-digit token as cardinal words. Tokens that fail
/// to parse or convert are kept as-is; that is a non-match, not an
/// error.
pub(crate) fn digits_to_words(text: &str) -> String {
    text.split_whitespace()
        .map(spell_out)
        .collect::<Vec<_>>()
        .join(" ")
}

fn spell_out(token: &str) -> String {
    // ASCII digits only; other numeral scripts fall through as a non-match.
    if token.is_empty() || !token.chars().all(|ch| ch.is_ascii_digit()) {
        return token.to_string();
    }
    let Ok(value) = token.parse::<i64>() else {
        return token.to_string();
    };
    match Num2Words::new(value).to_words() {
        // num2words hyphenates compounds; the pipeline output is
        // whitespace-delimited words.
        Ok(words) => words.replace('-', " "),
        Err(_) => token.to_string(),
    }
}

/// Replace standalone 4-digit years with [`YEAR_SENTINEL`], repeating
/// until no further year is found. Failing to find one simply ends the
/// loop.
pub(crate) fn label_years(text: &str, year_pattern: &Regex) -> String {
    let mut current = text.to_string();
    while let Some((start, end)) = next_year_span(&current, year_pattern) {
        current.replace_range(start..end, YEAR_SENTINEL);
    }
    current
}

fn next_year_span(text: &str, year_pattern: &Regex) -> Option<(usize, usize)> {
    for found in year_pattern.find_iter(text) {
        if let Ok(year) = found.as_str().parse::<i32>() {
            if YEAR_RANGE.contains(&year) {
                return Some((found.start(), found.end()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_pattern() -> Regex {
        Regex::new(r"\b\d{4}\b").expect("year pattern")
    }

    #[test]
    fn digit_tokens_become_words() {
        assert_eq!(digits_to_words("34 street"), "thirty four street");
        assert_eq!(digits_to_words("gate 7"), "gate seven");
    }

    #[test]
    fn mixed_tokens_pass_through() {
        assert_eq!(digits_to_words("u2 live"), "u2 live");
    }

    #[test]
    fn non_ascii_numerals_pass_through() {
        assert_eq!(
            digits_to_words("\u{0663}\u{0664} street"),
            "\u{0663}\u{0664} street"
        );
    }

    #[test]
    fn overlong_digit_runs_are_kept() {
        let token = "99999999999999999999";
        assert_eq!(digits_to_words(token), token);
    }

    #[test]
    fn each_year_is_labelled() {
        assert_eq!(
            label_years("tour 2016 and 2017", &year_pattern()),
            "tour !YEAR! and !YEAR!"
        );
    }

    #[test]
    fn digits_inside_words_are_not_years() {
        assert_eq!(label_years("a2016b 12345", &year_pattern()), "a2016b 12345");
    }

    #[test]
    fn out_of_range_numbers_are_not_years() {
        assert_eq!(label_years("room 0042", &year_pattern()), "room 0042");
        assert_eq!(label_years("part 9999", &year_pattern()), "part 9999");
    }
}
