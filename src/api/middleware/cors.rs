//! Permissive CORS for browser clients on any origin.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method, and header. Preflight `OPTIONS` requests are
/// answered by the layer itself with an empty body.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
