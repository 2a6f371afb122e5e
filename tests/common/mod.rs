#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use vote_board::application::services::{ChatService, SuggestionService, VoteService};
use vote_board::infrastructure::chat::NullChatUpstream;
use vote_board::infrastructure::store::MemoryStore;
use vote_board::routes::app_router;
use vote_board::state::AppState;

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());

    let state = AppState::new(
        Arc::new(VoteService::new(store.clone())),
        Arc::new(SuggestionService::new(store.clone())),
        Arc::new(ChatService::new(Arc::new(NullChatUpstream::new()))),
    );

    (state, store)
}

pub fn test_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, store)
}
