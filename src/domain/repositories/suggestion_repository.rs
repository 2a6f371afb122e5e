//! Repository trait for suggestion list access.

use crate::domain::entities::{StoredSuggestion, Suggestion};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only suggestion list.
///
/// Each suggestion is stored as its own record with an atomically
/// incrementable vote count; a vote never rewrites other records.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis implementation
/// - [`crate::infrastructure::store::MemoryStore`] - in-memory fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    /// Returns every stored suggestion in submission order, newest first.
    ///
    /// Records that fail to parse are returned as
    /// [`StoredSuggestion::Raw`] rather than dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn list(&self) -> Result<Vec<StoredSuggestion>, AppError>;

    /// Appends a new suggestion to the head of the stored list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn append(&self, suggestion: &Suggestion) -> Result<(), AppError>;

    /// Atomically increments the vote count of the suggestion with the
    /// given id and returns the updated record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(suggestion))` when the id exists
    /// - `Ok(None)` when it does not; nothing is mutated
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout,
    /// and [`AppError::Internal`] when the stored record is malformed; the
    /// record is validated before the increment, so the error path never
    /// leaves a partial mutation behind.
    async fn increment_votes(&self, id: &str) -> Result<Option<Suggestion>, AppError>;

    /// Checks whether the store backend is reachable.
    async fn health_check(&self) -> bool;
}
