//! Chat upstream implementations.

pub mod http_upstream;
pub mod null_upstream;

pub use http_upstream::HttpChatUpstream;
pub use null_upstream::NullChatUpstream;
