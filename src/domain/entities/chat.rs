//! Boundary types for the chat proxy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One turn of the conversation history forwarded to the upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `user` or `assistant`; forwarded verbatim.
    pub role: String,
    pub content: String,
}

/// One shape from the editor's current canvas, summarized into the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeContext {
    pub id: String,
    pub kind: String,
    /// Free-form shape attributes (position, size, color, ...).
    #[serde(default)]
    pub attributes: Value,
}
