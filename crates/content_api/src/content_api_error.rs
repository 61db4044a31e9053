use thiserror::Error;

/// Failures talking to one of the content APIs.
#[derive(Debug, Error)]
pub enum ContentApiError {
    #[error("Request for {operation} failed.")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request for {operation} returned HTTP status {status}.")]
    Status { operation: &'static str, status: u16 },

    #[error("Could not decode the {operation} response.")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentApiError {
    /// The content API operation that failed, e.g. `anime details`.
    pub fn operation(&self) -> &'static str {
        match self {
            ContentApiError::Transport { operation, .. } => operation,
            ContentApiError::Status { operation, .. } => operation,
            ContentApiError::Decode { operation, .. } => operation,
        }
    }
}
