//! In-memory counter store.
//!
//! Used when Redis is not configured (state is lost on restart) and by the
//! integration tests. Mirrors the Redis layout: counters keyed by encoded
//! path, suggestions kept as raw JSON records, newest first.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::RwLock;

use crate::domain::entities::{StoredSuggestion, Suggestion, VotePath};
use crate::domain::repositories::{SuggestionRepository, VoteRepository};
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryStore {
    counts: RwLock<BTreeMap<String, u64>>,
    suggestions: RwLock<Vec<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw record exactly as given, bypassing the entity type.
    /// Lets tests exercise the parse-or-pass-through tolerance for
    /// malformed stored records.
    pub async fn seed_raw(&self, record: Value) {
        self.suggestions.write().await.insert(0, record);
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    async fn load_counts(&self) -> Result<Vec<(VotePath, u64)>, AppError> {
        let counts = self.counts.read().await;
        Ok(counts
            .iter()
            .filter_map(|(field, count)| VotePath::decode(field).map(|path| (path, *count)))
            .collect())
    }

    async fn increment(&self, path: &VotePath) -> Result<u64, AppError> {
        let mut counts = self.counts.write().await;
        let count = counts.entry(path.encode()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.counts.write().await.clear();
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[async_trait]
impl SuggestionRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<StoredSuggestion>, AppError> {
        let records = self.suggestions.read().await;
        Ok(records
            .iter()
            .cloned()
            .map(StoredSuggestion::from_value)
            .collect())
    }

    async fn append(&self, suggestion: &Suggestion) -> Result<(), AppError> {
        let record = serde_json::to_value(suggestion).map_err(|e| {
            AppError::internal(format!("failed to encode suggestion: {e}"), json!({}))
        })?;
        self.suggestions.write().await.insert(0, record);
        Ok(())
    }

    async fn increment_votes(&self, id: &str) -> Result<Option<Suggestion>, AppError> {
        let mut records = self.suggestions.write().await;

        let Some(record) = records
            .iter_mut()
            .find(|record| record.get("id").and_then(Value::as_str) == Some(id))
        else {
            return Ok(None);
        };

        // Validate before mutating so a malformed record is left untouched.
        let StoredSuggestion::Parsed(mut suggestion) = StoredSuggestion::from_value(record.clone())
        else {
            return Err(AppError::internal(
                "cannot vote on a malformed suggestion record",
                json!({ "suggestionId": id }),
            ));
        };

        suggestion.votes += 1;
        record["votes"] = suggestion.votes.into();

        Ok(Some(suggestion))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(id: &str) -> Suggestion {
        Suggestion {
            id: id.to_string(),
            text: "Add dark mode".to_string(),
            author: None,
            email: None,
            category: "ui".to_string(),
            created_at: Utc::now(),
            votes: 0,
        }
    }

    #[tokio::test]
    async fn sequential_increments_accumulate() {
        let store = MemoryStore::new();
        let path = VotePath::new("owner", "values", "right");

        for expected in 1..=5u64 {
            assert_eq!(store.increment(&path).await.unwrap(), expected);
        }

        let counts = store.load_counts().await.unwrap();
        assert_eq!(counts, vec![(path, 5)]);
    }

    #[tokio::test]
    async fn clear_removes_all_counters() {
        let store = MemoryStore::new();
        store
            .increment(&VotePath::new("owner", "values", "right"))
            .await
            .unwrap();
        store.clear().await.unwrap();
        assert!(store.load_counts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_keeps_newest_first() {
        let store = MemoryStore::new();
        store.append(&sample("first")).await.unwrap();
        store.append(&sample("second")).await.unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries[0].id(), Some("second"));
        assert_eq!(entries[1].id(), Some("first"));
    }

    #[tokio::test]
    async fn vote_on_unknown_id_mutates_nothing() {
        let store = MemoryStore::new();
        store.append(&sample("a")).await.unwrap();

        assert!(store.increment_votes("missing").await.unwrap().is_none());
        assert_eq!(store.list().await.unwrap()[0].votes(), 0);
    }

    #[tokio::test]
    async fn vote_on_malformed_record_fails_without_mutating() {
        let store = MemoryStore::new();
        store.seed_raw(json!({ "id": "bad", "votes": 7 })).await;

        assert!(store.increment_votes("bad").await.is_err());
        assert_eq!(store.list().await.unwrap()[0].votes(), 7);
    }

    #[tokio::test]
    async fn seeded_raw_records_pass_through_list() {
        let store = MemoryStore::new();
        store.seed_raw(json!({ "legacy": true })).await;

        let entries = store.list().await.unwrap();
        assert_eq!(entries[0], StoredSuggestion::Raw(json!({ "legacy": true })));
    }
}
