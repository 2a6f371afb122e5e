//! Application services orchestrating domain operations.

pub mod chat_service;
pub mod suggestion_service;
pub mod vote_service;

pub use chat_service::ChatService;
pub use suggestion_service::{NewSuggestion, SuggestionService};
pub use vote_service::VoteService;
