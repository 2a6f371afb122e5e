//! DTOs for the suggestion endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /suggestions`.
///
/// All fields are optional at the deserialization layer so a missing
/// required field surfaces as a 400 validation error, not a body rejection;
/// presence of `suggestion` and `category` is enforced by the service.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSuggestionRequest {
    pub suggestion: Option<String>,
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub category: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Request body for `POST /suggestions/vote`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSuggestionRequest {
    pub suggestion_id: Option<String>,
}
