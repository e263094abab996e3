//! Top-level router.
//!
//! `/api` routes get a request timeout; the websocket route does not, since a
//! review conversation lasts as long as the customer takes to answer.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::middleware::{cors_layer, request_span};
use super::orders::{order_routes, OrderHandlers};
use super::review::{review_routes, ReviewWebSocketState};
use super::status::status;

/// Builds the full application router.
pub fn app_router(
    orders: OrderHandlers,
    review: ReviewWebSocketState,
    config: &ServerConfig,
) -> Router {
    let api_routes = Router::new()
        .route("/api/status", get(status))
        .nest("/api/orders", order_routes(orders))
        .layer(TimeoutLayer::new(config.request_timeout()));

    Router::new()
        .merge(api_routes)
        .merge(review_routes(review))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::new())
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors_layer(config)),
        )
}
