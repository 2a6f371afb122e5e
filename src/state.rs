//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ChatService, SuggestionService, VoteService};

/// Constructed once at startup and cloned into every handler. Services are
/// stateless; all shared mutable state lives in the counter store behind
/// them.
#[derive(Clone)]
pub struct AppState {
    pub votes: Arc<VoteService>,
    pub suggestions: Arc<SuggestionService>,
    pub chat: Arc<ChatService>,
}

impl AppState {
    pub fn new(
        votes: Arc<VoteService>,
        suggestions: Arc<SuggestionService>,
        chat: Arc<ChatService>,
    ) -> Self {
        Self {
            votes,
            suggestions,
            chat,
        }
    }
}
