//! Request/response DTOs.

pub mod chat;
pub mod health;
pub mod suggestions;
pub mod votes;
