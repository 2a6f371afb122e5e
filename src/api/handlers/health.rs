//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: the counter store is reachable
/// - **503 Service Unavailable**: the counter store is degraded
///
/// A disabled chat upstream is reported but does not degrade the service.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_healthy = state.votes.health_check().await;

    let store = if store_healthy {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Counter store reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Counter store unreachable".to_string()),
        }
    };

    let chat_upstream = if state.chat.is_configured() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Chat upstream configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "disabled".to_string(),
            message: None,
        }
    };

    let response = HealthResponse {
        status: if store_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store,
            chat_upstream,
        },
    };

    if store_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
