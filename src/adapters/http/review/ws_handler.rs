//! WebSocket endpoint running a review conversation.
//!
//! # Connection Flow
//! 1. Client requests `GET /ws/orders/:order_id` with an upgrade
//! 2. The order and its lines are loaded; unknown orders get 404 and orders
//!    that are not completed get 409, before any upgrade
//! 3. The connection is upgraded and the review conversation runs over it
//! 4. The socket is closed when the conversation ends, successfully or not

use std::sync::Arc;

use axum::{
    extract::{ws::WebSocketUpgrade, Path, State},
    response::Response,
    routing::get,
    Router,
};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::adapters::http::orders::{handle_order_error, parse_order_id};
use crate::adapters::websocket::WebSocketChannel;
use crate::application::handlers::review::{
    PrepareReviewHandler, PrepareReviewQuery, PreparedReview, ReviewConversationEngine,
};

// ════════════════════════════════════════════════════════════════════════════════
// WebSocket State
// ════════════════════════════════════════════════════════════════════════════════

/// State required for review sessions.
#[derive(Clone)]
pub struct ReviewWebSocketState {
    prepare_handler: Arc<PrepareReviewHandler>,
    engine: ReviewConversationEngine,
    /// Cancelled when the server shuts down.
    shutdown: CancellationToken,
    /// Running sessions, so shutdown can wait for them.
    sessions: TaskTracker,
}

impl ReviewWebSocketState {
    pub fn new(
        prepare_handler: Arc<PrepareReviewHandler>,
        engine: ReviewConversationEngine,
        shutdown: CancellationToken,
        sessions: TaskTracker,
    ) -> Self {
        Self {
            prepare_handler,
            engine,
            shutdown,
            sessions,
        }
    }
}

/// Creates the websocket router.
pub fn review_routes(state: ReviewWebSocketState) -> Router {
    Router::new()
        .route("/ws/orders/:order_id", get(review_ws_handler))
        .with_state(state)
}

// ════════════════════════════════════════════════════════════════════════════════
// WebSocket Upgrade Handler
// ════════════════════════════════════════════════════════════════════════════════

/// Handle WebSocket upgrade for a review conversation.
///
/// Route: `GET /ws/orders/:order_id`
pub async fn review_ws_handler(
    ws: WebSocketUpgrade,
    Path(order_id): Path<String>,
    State(state): State<ReviewWebSocketState>,
) -> Response {
    let order_id = match parse_order_id(&order_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let prepared = match state
        .prepare_handler
        .handle(PrepareReviewQuery { order_id })
        .await
    {
        Ok(prepared) => prepared,
        Err(e) => return handle_order_error(e),
    };

    ws.on_upgrade(move |socket| run_review_socket(socket, prepared, state))
}

// ════════════════════════════════════════════════════════════════════════════════
// WebSocket Connection Handler
// ════════════════════════════════════════════════════════════════════════════════

async fn run_review_socket(
    socket: axum::extract::ws::WebSocket,
    prepared: PreparedReview,
    state: ReviewWebSocketState,
) {
    let _running = state.sessions.token();
    let mut channel = WebSocketChannel::new(socket);

    tracing::info!(
        order_id = %prepared.order.id,
        products = prepared.products.len(),
        "Review connection established"
    );

    let result = state
        .engine
        .run_review_session(
            &prepared.order,
            &prepared.products,
            &mut channel,
            &state.shutdown,
        )
        .await;

    match result {
        Ok(summary) => tracing::info!(
            order_id = %summary.order_id,
            reviews = summary.reviews.len(),
            "Review connection finished"
        ),
        Err(e) if e.is_client_side() => tracing::info!(
            order_id = %prepared.order.id,
            error = %e,
            "Review connection dropped by client"
        ),
        Err(e) => tracing::error!(
            order_id = %prepared.order.id,
            error = %e,
            "Review connection failed"
        ),
    }

    channel.close().await;
}
