//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Programme catalog loading
//! - `storage` - Completion, routine and notification stores
//! - `http` - axum REST API

pub mod catalog;
pub mod http;
pub mod storage;
