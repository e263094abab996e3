//! HTTP routes for order endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_order, list_order_products, update_order_status, OrderHandlers};

/// Creates the order router, to be nested under `/api/orders`.
pub fn order_routes(handlers: OrderHandlers) -> Router {
    Router::new()
        .route("/:id", get(get_order).patch(update_order_status))
        .route("/:id/products", get(list_order_products))
        .with_state(handlers)
}
