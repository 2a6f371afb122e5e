//! Handler for the chat proxy endpoint.

use axum::{Json, extract::State};

use crate::api::dto::chat::{ChatRequest, ChatResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Forwards a conversation to the chat upstream and returns the raw reply.
///
/// # Endpoint
///
/// `POST /chat` with body `{messages, shapes?}`
///
/// # Errors
///
/// Returns 400 for an empty conversation history, 503 when no upstream is
/// configured or it refuses the request.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = state
        .chat
        .respond(&payload.messages, payload.shapes.as_deref())
        .await?;

    Ok(Json(ChatResponse { reply }))
}
