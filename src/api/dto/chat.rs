//! DTOs for the chat proxy endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ChatMessage, ShapeContext};

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Conversation history, oldest first. Must not be empty.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Current shapes on the editor canvas, summarized into the prompt.
    #[serde(default)]
    pub shapes: Option<Vec<ShapeContext>>,
}

/// Raw text reply from the upstream.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}
