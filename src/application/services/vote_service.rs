//! Vote aggregation service.

use std::sync::Arc;

use crate::domain::entities::{CategoryVotes, VotePath, VoteTable};
use crate::domain::repositories::VoteRepository;
use crate::error::AppError;
use serde_json::json;

/// Stateless service aggregating leaf counters into the nested vote table.
///
/// Holds no state of its own; every operation goes through the injected
/// repository. Increments are applied atomically per leaf at the store, so
/// there is no whole-table read-modify-write window.
pub struct VoteService {
    repository: Arc<dyn VoteRepository>,
}

impl VoteService {
    pub fn new(repository: Arc<dyn VoteRepository>) -> Self {
        Self { repository }
    }

    /// Returns the current table: stored counters overlaid on the default
    /// shape. Counters under categories absent from the default shape are
    /// logged and skipped.
    pub async fn table(&self) -> Result<VoteTable, AppError> {
        let mut table = VoteTable::default_shape();

        for (path, count) in self.repository.load_counts().await? {
            if !table.apply(&path, count) {
                tracing::warn!(
                    category = %path.category,
                    "stored counter references unknown category, skipping"
                );
            }
        }

        Ok(table)
    }

    /// Returns the sub-mapping for one category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the category is absent from the
    /// default shape.
    pub async fn category(&self, name: &str) -> Result<CategoryVotes, AppError> {
        let table = self.table().await?;
        table
            .category(name)
            .cloned()
            .ok_or_else(|| AppError::not_found("Unknown vote category", json!({ "category": name })))
    }

    /// Increments the leaf counter at (category, topic, option) by 1 and
    /// returns the updated category sub-mapping.
    ///
    /// The category must pre-exist in the default shape; topics and options
    /// are created implicitly at zero on first vote.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown category. Nothing is
    /// mutated in that case.
    pub async fn record_vote(
        &self,
        category: &str,
        topic: &str,
        option: &str,
    ) -> Result<CategoryVotes, AppError> {
        if !VoteTable::default_shape().contains_category(category) {
            return Err(AppError::not_found(
                "Unknown vote category",
                json!({ "category": category }),
            ));
        }

        let path = VotePath::new(category, topic, option);
        let count = self.repository.increment(&path).await?;
        tracing::debug!(%category, %topic, %option, count, "vote recorded");

        self.category(category).await
    }

    /// Deletes every stored counter. The next read returns the default
    /// shape with all leaves at zero.
    pub async fn reset(&self) -> Result<(), AppError> {
        self.repository.clear().await?;
        tracing::info!("vote table reset");
        Ok(())
    }

    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
