//! Suggestion entity and parse-tolerant stored record wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A submitted suggestion with a mutable vote count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Opaque unique identifier (UUID v4).
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub votes: u64,
}

/// A suggestion as read back from the store.
///
/// Records that fail to parse are passed through as opaque values rather
/// than dropped, so one malformed record never hides the rest of the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredSuggestion {
    Parsed(Suggestion),
    Raw(Value),
}

impl StoredSuggestion {
    /// Parses a raw store value, falling back to [`StoredSuggestion::Raw`].
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<Suggestion>(value.clone()) {
            Ok(suggestion) => Self::Parsed(suggestion),
            Err(_) => Self::Raw(value),
        }
    }

    /// Vote count used for ordering. Raw records contribute their `votes`
    /// field when it is a readable non-negative number, otherwise zero.
    pub fn votes(&self) -> u64 {
        match self {
            Self::Parsed(suggestion) => suggestion.votes,
            Self::Raw(value) => value.get("votes").and_then(Value::as_u64).unwrap_or(0),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Parsed(suggestion) => Some(&suggestion.id),
            Self::Raw(value) => value.get("id").and_then(Value::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_records_parse() {
        let value = json!({
            "id": "abc",
            "text": "Add dark mode",
            "category": "ui",
            "created_at": "2024-05-01T12:00:00Z",
            "votes": 3
        });
        match StoredSuggestion::from_value(value) {
            StoredSuggestion::Parsed(s) => {
                assert_eq!(s.id, "abc");
                assert_eq!(s.votes, 3);
                assert_eq!(s.author, None);
            }
            StoredSuggestion::Raw(_) => panic!("expected parsed record"),
        }
    }

    #[test]
    fn malformed_records_pass_through() {
        let value = json!({ "legacy": true, "votes": 9 });
        let stored = StoredSuggestion::from_value(value.clone());
        assert_eq!(stored, StoredSuggestion::Raw(value));
        assert_eq!(stored.votes(), 9);
        assert_eq!(stored.id(), None);
    }

    #[test]
    fn raw_votes_default_to_zero() {
        let stored = StoredSuggestion::from_value(json!({"votes": "many"}));
        assert_eq!(stored.votes(), 0);
    }
}
