//! Reviewbot - order management backend with a conversational review engine.
//!
//! Customers of a completed order connect over a websocket and are asked,
//! product by product, how they liked their purchase. Each answer is scored
//! for sentiment, stored and answered, and the order is finally marked
//! `reviewed`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
pub mod shutdown;
pub mod telemetry;
