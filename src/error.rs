// third-party imports
use thiserror::Error;

/// Error is an error which may occur when compiling a pattern.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
    #[error("invalid regular expression: {0}")]
    FancyRegex(#[from] fancy_regex::Error),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
