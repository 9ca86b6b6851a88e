//! CLI library components for titlenorm.

pub mod logging;
