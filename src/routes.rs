//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`           - component health checks
//! - `GET/POST /votes`        - vote table reads, increments, reset
//! - `GET/POST /suggestions`  - suggestion list and submission
//! - `POST /suggestions/vote` - suggestion voting
//! - `POST /chat`             - chat proxy
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **CORS** - any origin; preflight `OPTIONS` answered by the layer

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
