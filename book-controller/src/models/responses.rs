use serde::{Deserialize, Serialize};

/// Body the backend may attach to a rejected create or update.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// The backend's message, if it sent a non-empty one.
    pub fn into_message(self) -> Option<String> {
        self.error.filter(|message| !message.is_empty())
    }
}
