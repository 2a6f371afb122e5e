//! Handlers for the vote table endpoints.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::votes::{CastVoteQuery, ResetResponse, VotesQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the whole vote table, or one category's sub-mapping.
///
/// # Endpoint
///
/// `GET /votes[?category=C]`
///
/// # Errors
///
/// Returns 404 when `category` is not part of the default shape.
pub async fn list_votes_handler(
    State(state): State<AppState>,
    Query(query): Query<VotesQuery>,
) -> Result<Response, AppError> {
    match query.category {
        Some(category) => Ok(Json(state.votes.category(&category).await?).into_response()),
        None => Ok(Json(state.votes.table().await?).into_response()),
    }
}

/// Records one vote, or resets the whole table.
///
/// # Endpoint
///
/// - `POST /votes?category=C&topicId=T&optionId=O` - increments the leaf
///   counter and returns the updated category sub-mapping
/// - `POST /votes?reset=true` - deletes the table
///
/// # Errors
///
/// Returns 400 when the triple is incomplete (and reset is not requested),
/// 404 for an unknown category.
pub async fn cast_vote_handler(
    State(state): State<AppState>,
    Query(query): Query<CastVoteQuery>,
) -> Result<Response, AppError> {
    if query.is_reset() {
        state.votes.reset().await?;
        return Ok(Json(ResetResponse {
            message: "vote table reset".to_string(),
        })
        .into_response());
    }

    let (category, topic, option) = match (&query.category, &query.topic_id, &query.option_id) {
        (Some(category), Some(topic), Some(option)) => (category, topic, option),
        _ => {
            return Err(AppError::bad_request(
                "category, topicId and optionId are required",
                json!({
                    "category": &query.category,
                    "topicId": &query.topic_id,
                    "optionId": &query.option_id,
                }),
            ));
        }
    };

    let updated = state.votes.record_vote(category, topic, option).await?;
    Ok(Json(updated).into_response())
}
