//! Redis-backed counter store.
//!
//! Layout:
//!
//! - `votes:counters` - one hash; field = JSON-encoded (category, topic,
//!   option) triple, value = leaf count. `HINCRBY` gives the atomic per-leaf
//!   increment, so no whole-table write ever happens.
//! - `suggestions:item:{id}` - one hash per suggestion; the `votes` field is
//!   incremented with `HINCRBY`.
//! - `suggestions:index` - list of suggestion ids, newest first.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::Value;
use tracing::{info, warn};

use super::{StoreError, StoreResult, with_timeout};
use crate::domain::entities::{StoredSuggestion, Suggestion, VotePath};
use crate::domain::repositories::{SuggestionRepository, VoteRepository};
use crate::error::AppError;

const VOTES_KEY: &str = "votes:counters";
const SUGGESTION_INDEX_KEY: &str = "suggestions:index";

fn suggestion_key(id: &str) -> String {
    format!("suggestions:item:{id}")
}

/// Redis store implementation.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Every call is wrapped in the configured bounded timeout.
pub struct RedisStore {
    manager: ConnectionManager,
    call_timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, call_timeout: Duration) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("failed to create Redis client: {e}"))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        with_timeout(call_timeout, "PING", test_conn.ping::<()>())
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self {
            manager,
            call_timeout,
        })
    }
}

#[async_trait]
impl VoteRepository for RedisStore {
    async fn load_counts(&self) -> Result<Vec<(VotePath, u64)>, AppError> {
        let mut conn = self.manager.clone();
        let fields: HashMap<String, u64> = with_timeout(
            self.call_timeout,
            "HGETALL votes",
            conn.hgetall(VOTES_KEY),
        )
        .await?;

        let mut counts = Vec::with_capacity(fields.len());
        for (field, count) in fields {
            match VotePath::decode(&field) {
                Some(path) => counts.push((path, count)),
                None => warn!(%field, "undecodable counter field, skipping"),
            }
        }

        Ok(counts)
    }

    async fn increment(&self, path: &VotePath) -> Result<u64, AppError> {
        let mut conn = self.manager.clone();
        let count: u64 = with_timeout(
            self.call_timeout,
            "HINCRBY votes",
            conn.hincr(VOTES_KEY, path.encode(), 1i64),
        )
        .await?;
        Ok(count)
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut conn = self.manager.clone();
        let _: i64 = with_timeout(self.call_timeout, "DEL votes", conn.del(VOTES_KEY)).await?;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.manager.clone();
        with_timeout(self.call_timeout, "PING", conn.ping::<()>())
            .await
            .is_ok()
    }
}

#[async_trait]
impl SuggestionRepository for RedisStore {
    async fn list(&self) -> Result<Vec<StoredSuggestion>, AppError> {
        let mut conn = self.manager.clone();
        let ids: Vec<String> = with_timeout(
            self.call_timeout,
            "LRANGE suggestions",
            conn.lrange(SUGGESTION_INDEX_KEY, 0, -1),
        )
        .await?;

        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            let fields: HashMap<String, String> = with_timeout(
                self.call_timeout,
                "HGETALL suggestion",
                conn.hgetall(suggestion_key(&id)),
            )
            .await?;

            if fields.is_empty() {
                warn!(%id, "indexed suggestion record is missing, skipping");
                continue;
            }

            entries.push(StoredSuggestion::from_value(suggestion_value(fields)));
        }

        Ok(entries)
    }

    async fn append(&self, suggestion: &Suggestion) -> Result<(), AppError> {
        let mut fields: Vec<(&str, String)> = vec![
            ("id", suggestion.id.clone()),
            ("text", suggestion.text.clone()),
            ("category", suggestion.category.clone()),
            ("created_at", suggestion.created_at.to_rfc3339()),
            ("votes", suggestion.votes.to_string()),
        ];
        if let Some(ref author) = suggestion.author {
            fields.push(("author", author.clone()));
        }
        if let Some(ref email) = suggestion.email {
            fields.push(("email", email.clone()));
        }

        let mut conn = self.manager.clone();
        let _: () = with_timeout(
            self.call_timeout,
            "HSET suggestion",
            conn.hset_multiple(suggestion_key(&suggestion.id), &fields),
        )
        .await?;

        let _: i64 = with_timeout(
            self.call_timeout,
            "LPUSH suggestions",
            conn.lpush(SUGGESTION_INDEX_KEY, &suggestion.id),
        )
        .await?;

        Ok(())
    }

    async fn increment_votes(&self, id: &str) -> Result<Option<Suggestion>, AppError> {
        let key = suggestion_key(id);
        let mut conn = self.manager.clone();

        let fields: HashMap<String, String> =
            with_timeout(self.call_timeout, "HGETALL suggestion", conn.hgetall(&key)).await?;
        if fields.is_empty() {
            return Ok(None);
        }

        // Validate before incrementing so a malformed record is left
        // untouched. Suggestions are never deleted, so the record cannot
        // vanish between the read and the increment.
        let StoredSuggestion::Parsed(mut suggestion) =
            StoredSuggestion::from_value(suggestion_value(fields))
        else {
            return Err(AppError::internal(
                "cannot vote on a malformed suggestion record",
                serde_json::json!({ "suggestionId": id }),
            ));
        };

        suggestion.votes = with_timeout(
            self.call_timeout,
            "HINCRBY suggestion votes",
            conn.hincr(&key, "votes", 1i64),
        )
        .await?;

        Ok(Some(suggestion))
    }

    async fn health_check(&self) -> bool {
        VoteRepository::health_check(self).await
    }
}

/// Converts a suggestion hash into a JSON value, restoring the numeric
/// `votes` field. Unparseable counts stay strings so the record falls
/// through as [`StoredSuggestion::Raw`].
fn suggestion_value(fields: HashMap<String, String>) -> Value {
    let mut map = serde_json::Map::with_capacity(fields.len());
    for (key, value) in fields {
        let value = if key == "votes" {
            match value.parse::<u64>() {
                Ok(count) => Value::from(count),
                Err(_) => Value::String(value),
            }
        } else {
            Value::String(value)
        };
        map.insert(key, value);
    }
    Value::Object(map)
}
