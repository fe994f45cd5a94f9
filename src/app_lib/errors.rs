use thiserror::Error;

/// Failures surfaced by the HTTP wrapper and the feature clients built on it.
///
/// Transport failures and non-2xx responses are both plain rejections; callers
/// that need the status can read it through [`AppError::status`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("File error: {0}")]
    File(String),
}

impl AppError {
    /// HTTP status of a rejected response, `None` for every other failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
