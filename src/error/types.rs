use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the boxline crate.
pub type Result<T> = std::result::Result<T, BoxError>;

/// Errors surfaced at the fallible edges of box rendering.
///
/// Width estimation and rendering to a `String` never fail; only writing
/// rows out, loading options, and explicit logging can.
#[derive(Debug, Error)]
pub enum BoxError {
    #[error("invalid box options: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
