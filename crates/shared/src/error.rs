use thiserror::Error;

/// Outcome of a failed call to the simulation server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, aborted).
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body arrived but was not a valid update payload.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify an HTTP status code. Returns `None` for 2xx.
    pub fn from_status(code: u16) -> Option<Self> {
        if (200..300).contains(&code) {
            None
        } else {
            Some(ApiError::Status(code))
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
