//! WebSocket adapters.
//!
//! - [`channel`] - the review conversation transport over an upgraded socket

pub mod channel;

pub use channel::WebSocketChannel;
