//! Counter store implementations.

pub mod memory;
pub mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use std::future::Future;
use std::time::Duration;

use crate::error::AppError;
use serde_json::json;
use thiserror::Error;

/// Errors raised by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to store: {0}")]
    Connection(String),
    #[error("store operation `{operation}` failed: {message}")]
    Operation {
        operation: &'static str,
        message: String,
    },
    #[error("store operation `{operation}` timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::store_unavailable(error.to_string(), json!({}))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Applies the configured bounded timeout to a single store call.
///
/// Every network round-trip to the store goes through here so a hung
/// connection surfaces as [`StoreError::Timeout`] instead of stalling the
/// request.
pub(crate) async fn with_timeout<T>(
    after: Duration,
    operation: &'static str,
    call: impl Future<Output = redis::RedisResult<T>>,
) -> StoreResult<T> {
    match tokio::time::timeout(after, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(StoreError::Operation {
            operation,
            message: e.to_string(),
        }),
        Err(_) => Err(StoreError::Timeout { operation, after }),
    }
}
