//! Shared types for the titlenorm pipeline: options, lexicon tables,
//! and the error taxonomy.

pub mod error;
pub mod lexicon;
pub mod options;

pub use error::{NormaliseError, Result};
pub use lexicon::Lexicon;
pub use options::NormaliserOptions;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_serialize_round_trip() {
        let options = NormaliserOptions::new()
            .with_digits_to_words(true)
            .with_max_duplicate_window(3);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: NormaliserOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let round: NormaliserOptions =
            serde_json::from_str(r#"{"collapse_duplicate_words": true}"#)
                .expect("deserialize partial options");
        assert!(round.collapse_duplicate_words);
        assert!(round.lowercase);
        assert_eq!(round.max_duplicate_window, 4);
    }

    #[test]
    fn invalid_input_message() {
        let message = NormaliseError::InvalidInput.to_string();
        assert_eq!(message, "input must be a non-empty string");
    }
}
