//! HTTP adapter for order endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CustomerResponse, ErrorResponse, OrderProductResponse, OrderResponse, ProductResponse,
    UpdateOrderStatusRequest,
};
pub use handlers::{handle_order_error, parse_order_id, OrderHandlers};
pub use routes::order_routes;
