//! Handlers for the suggestion endpoints.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::suggestions::{SubmitSuggestionRequest, VoteSuggestionRequest};
use crate::application::services::NewSuggestion;
use crate::domain::entities::{StoredSuggestion, Suggestion};
use crate::error::AppError;
use crate::state::AppState;

/// Returns every suggestion sorted by vote count descending.
///
/// # Endpoint
///
/// `GET /suggestions`
pub async fn list_suggestions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredSuggestion>>, AppError> {
    Ok(Json(state.suggestions.list_all().await?))
}

/// Creates a new suggestion.
///
/// # Endpoint
///
/// `POST /suggestions` with body
/// `{suggestion, name?, email?, category, timestamp?}`
///
/// # Errors
///
/// Returns 400 when `suggestion` or `category` is missing, or when `email`
/// is present but not a valid address.
pub async fn submit_suggestion_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitSuggestionRequest>,
) -> Result<Json<Suggestion>, AppError> {
    payload.validate()?;

    let created = state
        .suggestions
        .submit(NewSuggestion {
            text: payload.suggestion,
            author: payload.name,
            email: payload.email,
            category: payload.category,
            timestamp: payload.timestamp,
        })
        .await?;

    Ok(Json(created))
}

/// Increments one suggestion's vote count.
///
/// # Endpoint
///
/// `POST /suggestions/vote` with body `{suggestionId}`
///
/// # Errors
///
/// Returns 400 when `suggestionId` is missing, 404 when it matches nothing.
pub async fn vote_suggestion_handler(
    State(state): State<AppState>,
    Json(payload): Json<VoteSuggestionRequest>,
) -> Result<Json<Suggestion>, AppError> {
    let id = payload
        .suggestion_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            AppError::bad_request("suggestionId is required", json!({ "field": "suggestionId" }))
        })?;

    Ok(Json(state.suggestions.vote(id).await?))
}
