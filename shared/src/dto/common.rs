use serde::{Deserialize, Serialize};

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Pulls the `error` field out of a response body, if it has one
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|response| response.error)
            .filter(|message| !message.trim().is_empty())
    }
}
