//! HTTP handlers for order endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::order::{
    GetOrderHandler, GetOrderQuery, ListOrderProductsHandler, ListOrderProductsQuery,
    UpdateOrderStatusCommand, UpdateOrderStatusHandler,
};
use crate::domain::foundation::OrderId;
use crate::domain::order::OrderError;

use super::dto::{ErrorResponse, OrderProductResponse, OrderResponse, UpdateOrderStatusRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct OrderHandlers {
    get_handler: Arc<GetOrderHandler>,
    list_products_handler: Arc<ListOrderProductsHandler>,
    update_status_handler: Arc<UpdateOrderStatusHandler>,
}

impl OrderHandlers {
    pub fn new(
        get_handler: Arc<GetOrderHandler>,
        list_products_handler: Arc<ListOrderProductsHandler>,
        update_status_handler: Arc<UpdateOrderStatusHandler>,
    ) -> Self {
        Self {
            get_handler,
            list_products_handler,
            update_status_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/orders/:id - Order with its customer
pub async fn get_order(
    State(handlers): State<OrderHandlers>,
    Path(order_id): Path<String>,
) -> Response {
    let order_id = match parse_order_id(&order_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetOrderQuery { order_id }).await {
        Ok(order) => (StatusCode::OK, Json(OrderResponse::from(order))).into_response(),
        Err(e) => handle_order_error(e),
    }
}

/// PATCH /api/orders/:id - Set the order status
pub async fn update_order_status(
    State(handlers): State<OrderHandlers>,
    Path(order_id): Path<String>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Response {
    let order_id = match parse_order_id(&order_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateOrderStatusCommand {
        order_id,
        status: req.status,
    };

    match handlers.update_status_handler.handle(cmd).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_order_error(e),
    }
}

/// GET /api/orders/:id/products - Purchased lines of the order
pub async fn list_order_products(
    State(handlers): State<OrderHandlers>,
    Path(order_id): Path<String>,
) -> Response {
    let order_id = match parse_order_id(&order_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .list_products_handler
        .handle(ListOrderProductsQuery { order_id })
        .await
    {
        Ok(lines) => {
            let response: Vec<OrderProductResponse> = lines.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_order_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

/// Parses a path order id, answering 400 when malformed.
pub fn parse_order_id(raw: &str) -> Result<OrderId, Response> {
    raw.parse::<OrderId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid order ID")),
        )
            .into_response()
    })
}

/// Maps an order error to its HTTP response.
pub fn handle_order_error(error: OrderError) -> Response {
    let status = match &error {
        OrderError::NotFound(_) => StatusCode::NOT_FOUND,
        OrderError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        OrderError::NotReviewable { .. } => StatusCode::CONFLICT,
        OrderError::Infrastructure(message) => {
            tracing::error!(error = %message, "Order request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response();
        }
    };

    (
        status,
        Json(ErrorResponse::new(error.code().to_string(), error.message())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OrderStatus;

    #[test]
    fn order_errors_map_to_status_codes() {
        let id = OrderId::new();
        assert_eq!(
            handle_order_error(OrderError::not_found(id)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            handle_order_error(OrderError::invalid_status("lost")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_order_error(OrderError::not_reviewable(id, OrderStatus::Placed)).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            handle_order_error(OrderError::infrastructure("pool closed")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn malformed_order_id_is_bad_request() {
        let response = parse_order_id("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(parse_order_id(&OrderId::new().to_string()).is_ok());
    }
}
