//! HTTP adapter for the review conversation websocket.

mod ws_handler;

pub use ws_handler::{review_routes, review_ws_handler, ReviewWebSocketState};
