//! HTTP request handlers.

pub mod chat;
pub mod health;
pub mod suggestions;
pub mod votes;

pub use chat::chat_handler;
pub use health::health_handler;
pub use suggestions::{list_suggestions_handler, submit_suggestion_handler, vote_suggestion_handler};
pub use votes::{cast_vote_handler, list_votes_handler};
