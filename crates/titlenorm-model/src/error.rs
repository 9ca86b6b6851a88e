use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormaliseError {
    #[error("input must be a non-empty string")]
    InvalidInput,
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("alias pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, NormaliseError>;
