//! Infrastructure layer: store and upstream integrations.

pub mod chat;
pub mod store;
