//! Application layer: business logic over the domain traits.

pub mod services;
