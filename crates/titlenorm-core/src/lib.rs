//! Title normalisation pipeline.
//!
//! Reduces near-duplicate free-form titles ("Sydney Entertainment
//! Centre" vs "Syd Ent Centre") to one canonical, whitespace-delimited
//! spelling for deduplication, matching, or indexing.
//!
//! The pipeline is an ordered sequence of independently toggleable
//! stages; see [`NormaliserOptions`] for the toggles and their
//! defaults.

mod normaliser;
mod stages;

pub use normaliser::Normaliser;
pub use stages::YEAR_SENTINEL;
pub use titlenorm_model::{Lexicon, NormaliseError, NormaliserOptions, Result};
