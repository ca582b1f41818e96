/// Errors produced while retrieving, normalizing or rendering Reddit data
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RedditError {
    #[error("Reddit API request failed: {}", describe_failure(.status, .reason))]
    RequestFailed { status: Option<u16>, reason: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, RedditError>;

fn describe_failure(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(code) => format!("{code} {reason}"),
        None => reason.to_string(),
    }
}

impl RedditError {
    /// Failure carrying a non-success HTTP status
    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        RedditError::RequestFailed {
            status: Some(status),
            reason: reason.into(),
        }
    }

    /// Failure below the HTTP layer (connect, timeout, body read)
    pub fn transport(reason: impl Into<String>) -> Self {
        RedditError::RequestFailed {
            status: None,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RedditError {
    fn from(err: serde_json::Error) -> Self {
        RedditError::Serialization(err.to_string())
    }
}
