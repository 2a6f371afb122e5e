//! Suggestion submission and voting service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{StoredSuggestion, Suggestion};
use crate::domain::repositories::SuggestionRepository;
use crate::error::AppError;

/// Fields accepted for a new suggestion; required ones are validated here
/// so a missing field surfaces as a 400 instead of a deserialization error.
#[derive(Debug, Default)]
pub struct NewSuggestion {
    pub text: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Stateless service over the append-only suggestion list.
pub struct SuggestionService {
    repository: Arc<dyn SuggestionRepository>,
}

impl SuggestionService {
    pub fn new(repository: Arc<dyn SuggestionRepository>) -> Self {
        Self { repository }
    }

    /// Returns every stored suggestion sorted by vote count descending.
    ///
    /// The base order is newest-submitted first; the sort is stable, so
    /// ties keep that relative order. Raw (unparseable) records sort with
    /// their readable `votes` field, or zero.
    pub async fn list_all(&self) -> Result<Vec<StoredSuggestion>, AppError> {
        let mut entries = self.repository.list().await?;
        entries.sort_by(|a, b| b.votes().cmp(&a.votes()));
        Ok(entries)
    }

    /// Creates a new suggestion with a fresh unique id and zero votes and
    /// appends it to the head of the stored list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `text` or `category` is missing
    /// or blank.
    pub async fn submit(&self, new: NewSuggestion) -> Result<Suggestion, AppError> {
        let text = required(new.text, "suggestion")?;
        let category = required(new.category, "category")?;

        let suggestion = Suggestion {
            id: Uuid::new_v4().to_string(),
            text,
            author: new.author,
            email: new.email,
            category,
            created_at: new.timestamp.unwrap_or_else(Utc::now),
            votes: 0,
        };

        self.repository.append(&suggestion).await?;
        tracing::debug!(id = %suggestion.id, category = %suggestion.category, "suggestion submitted");

        Ok(suggestion)
    }

    /// Increments the vote count of one suggestion by 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id; nothing is mutated.
    pub async fn vote(&self, id: &str) -> Result<Suggestion, AppError> {
        self.repository
            .increment_votes(id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Suggestion not found", json!({ "suggestionId": id }))
            })
    }

    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::bad_request(
            format!("Missing required field: {field}"),
            json!({ "field": field }),
        )),
    }
}
