//! DTOs for the vote table endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /votes`.
#[derive(Debug, Deserialize)]
pub struct VotesQuery {
    pub category: Option<String>,
}

/// Query parameters for `POST /votes`.
///
/// Either `reset=true` or the full (category, topicId, optionId) triple.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteQuery {
    pub category: Option<String>,
    pub topic_id: Option<String>,
    pub option_id: Option<String>,
    pub reset: Option<String>,
}

impl CastVoteQuery {
    pub fn is_reset(&self) -> bool {
        self.reset
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
    }
}

/// Confirmation body for `POST /votes?reset=true`.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
}
