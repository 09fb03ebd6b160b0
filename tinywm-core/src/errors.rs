use thiserror::Error;

pub type Result<T> = std::result::Result<T, TinyError>;

/// Startup failures. Nothing after the grabs are in place can fail.
#[derive(Debug, Error)]
pub enum TinyError {
    #[error("Unable to open the display: {0}")]
    DisplayOpen(String),
    #[error("Unknown key name: {0:?}")]
    UnknownKey(String),
}
