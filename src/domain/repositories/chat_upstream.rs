//! Boundary trait for the chat-completion upstream.

use crate::domain::entities::ChatMessage;
use crate::error::AppError;
use async_trait::async_trait;

/// Stateless forwarding boundary to a chat-completion service.
///
/// # Implementations
///
/// - [`crate::infrastructure::chat::HttpChatUpstream`] - HTTP client
/// - [`crate::infrastructure::chat::NullChatUpstream`] - used when no
///   upstream is configured; every call answers 503
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatUpstream: Send + Sync {
    /// Forwards the system prompt and conversation history, returning the
    /// upstream's raw text response. No retries are performed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the upstream is not
    /// configured or refuses the request.
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, AppError>;

    /// Whether a real upstream is configured.
    fn is_configured(&self) -> bool;
}
