//! No-op chat upstream for deployments without a configured endpoint.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::ChatMessage;
use crate::domain::repositories::ChatUpstream;
use crate::error::AppError;

/// Used when `CHAT_UPSTREAM_URL` is unset. Every call answers 503 with a
/// generic message; the rest of the service keeps working.
pub struct NullChatUpstream;

impl NullChatUpstream {
    pub fn new() -> Self {
        debug!("Using NullChatUpstream (chat proxy disabled)");
        Self
    }
}

impl Default for NullChatUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatUpstream for NullChatUpstream {
    async fn complete(
        &self,
        _system_prompt: &str,
        _messages: &[ChatMessage],
    ) -> Result<String, AppError> {
        Err(AppError::unavailable(
            "Chat upstream is not configured",
            json!({}),
        ))
    }

    fn is_configured(&self) -> bool {
        false
    }
}
