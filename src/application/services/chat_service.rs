//! Chat proxy service: prompt assembly and upstream forwarding.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{ChatMessage, ShapeContext};
use crate::domain::repositories::ChatUpstream;
use crate::error::AppError;

const SYSTEM_PROMPT: &str = "\
You are a shape-editing assistant embedded in a drawing tool. Answer the user \
conversationally. When the user asks you to create, modify, or delete shapes, \
include a fenced ```commands``` block in your reply containing one JSON command \
per line; the editor extracts and executes that block verbatim.";

/// Stateless request/response forwarding layer for the shape-editing chat.
///
/// Assembles a system prompt plus a textual summary of the editor's current
/// shapes, forwards the conversation to the upstream, and returns the raw
/// text response. The caller parses any embedded command block; this service
/// does not.
pub struct ChatService {
    upstream: Arc<dyn ChatUpstream>,
}

impl ChatService {
    pub fn new(upstream: Arc<dyn ChatUpstream>) -> Self {
        Self { upstream }
    }

    pub fn is_configured(&self) -> bool {
        self.upstream.is_configured()
    }

    /// Forwards the conversation and returns the upstream's raw reply.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty history and
    /// [`AppError::Unavailable`] when no upstream is configured or the
    /// upstream refuses the request. No retries are performed.
    pub async fn respond(
        &self,
        messages: &[ChatMessage],
        shapes: Option<&[ShapeContext]>,
    ) -> Result<String, AppError> {
        if messages.is_empty() {
            return Err(AppError::bad_request(
                "Conversation history must not be empty",
                json!({ "field": "messages" }),
            ));
        }

        let prompt = build_system_prompt(shapes);
        self.upstream.complete(&prompt, messages).await
    }
}

/// Appends a one-line-per-shape summary of the current canvas to the fixed
/// system prompt.
fn build_system_prompt(shapes: Option<&[ShapeContext]>) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT);

    match shapes.filter(|s| !s.is_empty()) {
        Some(shapes) => {
            prompt.push_str("\n\nCurrent shapes on the canvas:\n");
            for shape in shapes {
                prompt.push_str(&format!("- {} (id: {})", shape.kind, shape.id));
                if !shape.attributes.is_null() {
                    prompt.push_str(&format!(" {}", shape.attributes));
                }
                prompt.push('\n');
            }
        }
        None => prompt.push_str("\n\nThe canvas is currently empty."),
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockChatUpstream;
    use serde_json::Value;

    fn history() -> Vec<ChatMessage> {
        vec![ChatMessage {
            role: "user".to_string(),
            content: "draw a circle".to_string(),
        }]
    }

    #[tokio::test]
    async fn empty_history_is_rejected_before_forwarding() {
        let mut upstream = MockChatUpstream::new();
        upstream.expect_complete().times(0);

        let service = ChatService::new(Arc::new(upstream));
        let result = service.respond(&[], None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn prompt_summarizes_current_shapes() {
        let mut upstream = MockChatUpstream::new();
        upstream
            .expect_complete()
            .withf(|prompt, _| {
                prompt.contains("Current shapes on the canvas")
                    && prompt.contains("- circle (id: s1)")
            })
            .times(1)
            .returning(|_, _| Ok("done".to_string()));

        let shapes = vec![ShapeContext {
            id: "s1".to_string(),
            kind: "circle".to_string(),
            attributes: Value::Null,
        }];

        let service = ChatService::new(Arc::new(upstream));
        let reply = service.respond(&history(), Some(&shapes)).await.unwrap();
        assert_eq!(reply, "done");
    }

    #[tokio::test]
    async fn prompt_notes_empty_canvas() {
        let mut upstream = MockChatUpstream::new();
        upstream
            .expect_complete()
            .withf(|prompt, _| prompt.contains("canvas is currently empty"))
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let service = ChatService::new(Arc::new(upstream));
        service.respond(&history(), Some(&[])).await.unwrap();
    }
}
