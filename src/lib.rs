//! # Vote Board
//!
//! A small voting and suggestion board API built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Counter store and chat upstream integrations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Nested vote table with atomic per-leaf counter increments
//! - Append-only suggestion list with per-entry vote counts
//! - Parse-tolerant reads: malformed stored records are passed through, not dropped
//! - Thin chat proxy for the shape-editing assistant
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: durable counter store
//! export REDIS_URL="redis://localhost:6379/0"
//!
//! # Optional: chat proxy upstream
//! export CHAT_UPSTREAM_URL="https://api.openai.com/v1/chat/completions"
//! export CHAT_API_KEY="sk-..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ChatService, SuggestionService, VoteService};
    pub use crate::domain::entities::{StoredSuggestion, Suggestion, VotePath, VoteTable};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
