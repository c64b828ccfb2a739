//! Error types
//!
//! Only configuration can fail. A step with a bad speed factor is not an
//! error; it is reported through `StepOutcome::NotAdvanced`.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Rejected mass ratio exponent, arena size or settings value.
    /// Any existing state is left untouched.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Settings file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `Settings`.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
