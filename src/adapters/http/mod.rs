//! HTTP adapters - REST and websocket endpoints.
//!
//! - `orders` - order lookup, status changes and order lines
//! - `review` - the review conversation websocket
//! - `status` - liveness
//! - `router` - assembles everything with the middleware stack

pub mod middleware;
pub mod orders;
pub mod review;
pub mod router;
pub mod status;

pub use orders::{order_routes, OrderHandlers};
pub use review::{review_routes, ReviewWebSocketState};
pub use router::app_router;
