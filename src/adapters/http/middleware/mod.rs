//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `cors` - Allowed origins from server configuration
//! - `tracing` - Request ids and per-request spans

pub mod cors;
pub mod tracing;

pub use cors::cors_layer;
pub use self::tracing::{request_span, REQUEST_ID_HEADER};
