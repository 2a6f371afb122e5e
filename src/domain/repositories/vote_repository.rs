//! Repository trait for vote counter access.

use crate::domain::entities::VotePath;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the vote counter store.
///
/// Counters are addressed per leaf, never as a whole document. Increments
/// are atomic at the store, so concurrent votes cannot lose each other's
/// writes.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis implementation
/// - [`crate::infrastructure::store::MemoryStore`] - in-memory fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Returns every stored leaf counter with its count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn load_counts(&self) -> Result<Vec<(VotePath, u64)>, AppError>;

    /// Atomically increments one leaf counter by 1, creating it at zero if
    /// missing, and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn increment(&self, path: &VotePath) -> Result<u64, AppError>;

    /// Deletes every stored counter. The next read reinitializes defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn clear(&self) -> Result<(), AppError>;

    /// Checks whether the store backend is reachable.
    async fn health_check(&self) -> bool;
}
