//! Core business entities.

pub mod chat;
pub mod suggestion;
pub mod vote_table;

pub use chat::{ChatMessage, ShapeContext};
pub use suggestion::{StoredSuggestion, Suggestion};
pub use vote_table::{CategoryVotes, VotePath, VoteTable};
