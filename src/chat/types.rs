//! Request / response types for the chat endpoint.

use serde::{Deserialize, Serialize};

/// Incoming chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
    /// Display name to greet the user by, if the client knows one.
    #[serde(default)]
    pub user: Option<String>,
}

/// Chat response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The bot's reply text.
    pub reply: String,
}
