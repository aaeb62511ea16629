use thiserror::Error;

/// Classified outcome of a failed country fetch.
///
/// The loader is the only place these are produced; views only read
/// [`FetchError::code`] / [`FetchError::message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network failure, timeout, or a body that could not be decoded.
    #[error("{message}")]
    Transport { message: String },
    /// The API rejected the requested code. The message ends in `400`.
    #[error("{message}")]
    NotFound { message: String },
    /// Any other non-success HTTP status.
    #[error("{message}")]
    Upstream { status: u16, message: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport {
            message: message.into(),
        }
    }

    /// Classify a non-success HTTP status for `what` (usually the request URL).
    pub fn from_status(status: u16, what: &str) -> Self {
        let message = format!("request for {} failed with HTTP {}", what, status);
        if status == 400 {
            FetchError::NotFound { message }
        } else {
            FetchError::Upstream { status, message }
        }
    }

    /// View classification: `500` timeout/generic, `400` not found, `404` anything else.
    pub fn code(&self) -> u16 {
        match self {
            FetchError::Transport { .. } => 500,
            FetchError::NotFound { .. } => 400,
            FetchError::Upstream { .. } => 404,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FetchError::Transport { message }
            | FetchError::NotFound { message }
            | FetchError::Upstream { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::transport(format!("request timed out: {}", e))
        } else {
            FetchError::transport(format!("network error: {}", e))
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::transport(format!("decode json: {}", e))
    }
}
