//! HTTP client for the chat-completion upstream.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::entities::ChatMessage;
use crate::domain::repositories::ChatUpstream;
use crate::error::AppError;

#[derive(Serialize)]
struct UpstreamRequest<'a> {
    model: &'a str,
    messages: Vec<UpstreamMessage<'a>>,
}

#[derive(Serialize)]
struct UpstreamMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct UpstreamResponse {
    choices: Vec<UpstreamChoice>,
}

#[derive(Deserialize)]
struct UpstreamChoice {
    message: UpstreamChoiceMessage,
}

#[derive(Deserialize)]
struct UpstreamChoiceMessage {
    content: String,
}

/// Forwards conversations to a chat-completion HTTP API and returns the raw
/// text reply. Stateless; no retries.
pub struct HttpChatUpstream {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpChatUpstream {
    pub fn new(
        url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl ChatUpstream for HttpChatUpstream {
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, AppError> {
        let mut upstream_messages = Vec::with_capacity(messages.len() + 1);
        upstream_messages.push(UpstreamMessage {
            role: "system",
            content: system_prompt,
        });
        upstream_messages.extend(messages.iter().map(|m| UpstreamMessage {
            role: &m.role,
            content: &m.content,
        }));

        let body = UpstreamRequest {
            model: &self.model,
            messages: upstream_messages,
        };

        let mut request = self.http.post(&self.url).json(&body);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            error!("chat upstream request failed: {e}");
            AppError::unavailable("Chat upstream is unreachable", json!({}))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "chat upstream returned an error status");
            return Err(AppError::unavailable(
                "Chat upstream returned an error",
                json!({}),
            ));
        }

        let parsed: UpstreamResponse = response.json().await.map_err(|e| {
            error!("chat upstream returned an unreadable body: {e}");
            AppError::unavailable("Chat upstream returned an unreadable response", json!({}))
        })?;

        let reply = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::unavailable("Chat upstream returned no choices", json!({}))
            })?;

        debug!(chars = reply.len(), "chat upstream replied");
        Ok(reply)
    }

    fn is_configured(&self) -> bool {
        true
    }
}
