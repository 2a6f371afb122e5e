//! API route configuration.

use crate::api::handlers::{
    cast_vote_handler, chat_handler, list_suggestions_handler, list_votes_handler,
    submit_suggestion_handler, vote_suggestion_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `GET  /votes[?category=C]`   - vote table or one category
/// - `POST /votes?...`            - record a vote or reset the table
/// - `GET  /suggestions`          - suggestions, vote count descending
/// - `POST /suggestions`          - submit a suggestion
/// - `POST /suggestions/vote`     - vote for a suggestion
/// - `POST /chat`                 - forward a conversation to the chat upstream
///
/// Unsupported methods on these paths answer 405 at the router level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/votes", get(list_votes_handler).post(cast_vote_handler))
        .route(
            "/suggestions",
            get(list_suggestions_handler).post(submit_suggestion_handler),
        )
        .route("/suggestions/vote", post(vote_suggestion_handler))
        .route("/chat", post(chat_handler))
}
