//! The individual pipeline stages.
//!
//! Stage functions are stateless; anything that needs compiled state
//! (alias matchers, the year pattern) receives it from the
//! [`Normaliser`](crate::Normaliser), which builds it once.

pub(crate) mod aliases;
pub(crate) mod cleanup;
pub(crate) mod dedupe;
pub(crate) mod numbers;

pub use numbers::YEAR_SENTINEL;
