//! HTTP server initialization and runtime setup.
//!
//! Wires the store, services, and Axum server lifecycle together. The store
//! client is constructed once here and shared across all requests.

use crate::application::services::{ChatService, SuggestionService, VoteService};
use crate::config::Config;
use crate::domain::repositories::{ChatUpstream, SuggestionRepository, VoteRepository};
use crate::infrastructure::chat::{HttpChatUpstream, NullChatUpstream};
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Counter store (Redis, or the in-memory fallback)
/// - Chat upstream (HTTP client, or the null fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the Redis connection, server bind, or server runtime
/// fails.
pub async fn run(config: Config) -> Result<()> {
    let (vote_repository, suggestion_repository): (
        Arc<dyn VoteRepository>,
        Arc<dyn SuggestionRepository>,
    ) = if let Some(redis_url) = &config.redis_url {
        let store = Arc::new(RedisStore::connect(redis_url, config.store_timeout()).await?);
        tracing::info!("Counter store: Redis");
        (store.clone(), store)
    } else {
        tracing::warn!("REDIS_URL not set; using in-memory store (state is lost on restart)");
        let store = Arc::new(MemoryStore::new());
        (store.clone(), store)
    };

    let chat_upstream: Arc<dyn ChatUpstream> = match &config.chat_upstream_url {
        Some(url) => {
            tracing::info!("Chat upstream enabled (model: {})", config.chat_model);
            Arc::new(HttpChatUpstream::new(
                url.clone(),
                config.chat_api_key.clone(),
                config.chat_model.clone(),
                config.chat_timeout(),
            )?)
        }
        None => {
            tracing::info!("Chat upstream disabled (NullChatUpstream)");
            Arc::new(NullChatUpstream::new())
        }
    };

    let state = AppState::new(
        Arc::new(VoteService::new(vote_repository)),
        Arc::new(SuggestionService::new(suggestion_repository)),
        Arc::new(ChatService::new(chat_upstream)),
    );

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
