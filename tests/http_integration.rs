//! Integration tests for the HTTP and websocket surface.
//!
//! The full router runs over `InMemoryOrderRepository`:
//! 1. REST endpoints answer with the documented status codes and bodies
//! 2. The review websocket refuses unknown and non-completed orders
//! 3. A customer can walk through a complete review over a real socket

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tower::ServiceExt;

use reviewbot::adapters::InMemoryOrderRepository;
use reviewbot::config::{ReviewConfig, ServerConfig};
use reviewbot::domain::foundation::{OrderId, OrderStatus};
use reviewbot::domain::order::{Customer, Order, OrderProduct, Product};
use reviewbot::server::build_router;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(repository: Arc<InMemoryOrderRepository>) -> Router {
    build_router(
        &ServerConfig::default(),
        &ReviewConfig::default(),
        repository,
        CancellationToken::new(),
        TaskTracker::new(),
    )
}

async fn seed(
    repository: &InMemoryOrderRepository,
    status: OrderStatus,
    product_names: &[&str],
) -> (Order, Vec<OrderProduct>) {
    let order = Order::new(Customer::new("Jane", "Doe", "jane@example.com"), status);
    let lines: Vec<OrderProduct> = product_names
        .iter()
        .map(|name| OrderProduct::new(order.id, 2, Product::named(*name)))
        .collect();
    repository.seed(order.clone(), lines.clone()).await;
    (order, lines)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn patch(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Serves the app on an ephemeral port and returns its address.
async fn serve(app: Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn next_text<S>(socket: &mut S) -> String
where
    S: futures::Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    loop {
        match socket.next().await {
            Some(Ok(Message::Text(text))) => return text,
            Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => continue,
            other => panic!("expected a text frame, got {:?}", other),
        }
    }
}

// =============================================================================
// REST endpoints
// =============================================================================

#[tokio::test]
async fn status_reports_ok() {
    let (status, body) = send(app(Arc::new(InMemoryOrderRepository::new())), get("/api/status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "OK" }));
}

#[tokio::test]
async fn get_order_returns_order_with_customer() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let (order, _) = seed(&repository, OrderStatus::Sending, &["Tyre"]).await;

    let (status, body) = send(app(repository), get(&format!("/api/orders/{}", order.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uuid"], order.id.to_string());
    assert_eq!(body["status"], "sending");
    assert_eq!(body["customer"]["first_name"], "Jane");
    assert_eq!(body["customer"]["last_name"], "Doe");
}

#[tokio::test]
async fn get_unknown_order_is_not_found() {
    let uri = format!("/api/orders/{}", OrderId::new());
    let (status, _) = send(app(Arc::new(InMemoryOrderRepository::new())), get(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_order_id_is_bad_request() {
    let (status, body) = send(
        app(Arc::new(InMemoryOrderRepository::new())),
        get("/api/orders/not-a-uuid"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn patch_updates_status() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let (order, _) = seed(&repository, OrderStatus::Sending, &["Tyre"]).await;

    let (status, _) = send(
        app(repository.clone()),
        patch(
            &format!("/api/orders/{}", order.id),
            json!({ "status": "completed" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(
        repository.order_status(&order.id).await,
        Some(OrderStatus::Completed)
    );
}

#[tokio::test]
async fn patch_rejects_unknown_and_reserved_statuses() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let (order, _) = seed(&repository, OrderStatus::Completed, &["Tyre"]).await;
    let uri = format!("/api/orders/{}", order.id);

    let (unknown, _) = send(app(repository.clone()), patch(&uri, json!({ "status": "lost" }))).await;
    let (reserved, _) =
        send(app(repository.clone()), patch(&uri, json!({ "status": "reviewed" }))).await;

    assert_eq!(unknown, StatusCode::BAD_REQUEST);
    assert_eq!(reserved, StatusCode::BAD_REQUEST);
    assert_eq!(
        repository.order_status(&order.id).await,
        Some(OrderStatus::Completed)
    );
}

#[tokio::test]
async fn patch_unknown_order_is_not_found() {
    let (status, _) = send(
        app(Arc::new(InMemoryOrderRepository::new())),
        patch(
            &format!("/api/orders/{}", OrderId::new()),
            json!({ "status": "completed" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn products_lists_order_lines() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let (order, lines) = seed(&repository, OrderStatus::Placed, &["Tyre", "Wiper"]).await;

    let (status, body) = send(
        app(repository),
        get(&format!("/api/orders/{}/products", order.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["uuid"], lines[0].id.to_string());
    assert_eq!(items[0]["order_uuid"], order.id.to_string());
    assert_eq!(items[0]["items"], 2);
    assert_eq!(items[0]["product"]["name"], "Tyre");
    assert_eq!(items[1]["product"]["name"], "Wiper");
}

#[tokio::test]
async fn products_of_unknown_order_is_not_found() {
    let (status, _) = send(
        app(Arc::new(InMemoryOrderRepository::new())),
        get(&format!("/api/orders/{}/products", OrderId::new())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let response = app(Arc::new(InMemoryOrderRepository::new()))
        .oneshot(get("/api/status"))
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

// =============================================================================
// Review websocket
// =============================================================================

fn rejected_status(err: tungstenite::Error) -> StatusCode {
    match err {
        tungstenite::Error::Http(response) => {
            StatusCode::from_u16(response.status().as_u16()).unwrap()
        }
        other => panic!("expected an HTTP rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn review_socket_rejects_order_that_is_not_completed() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let (order, _) = seed(&repository, OrderStatus::Sending, &["Tyre"]).await;
    let addr = serve(app(repository)).await;

    let err = tokio_tungstenite::connect_async(format!("ws://{}/ws/orders/{}", addr, order.id))
        .await
        .unwrap_err();

    assert_eq!(rejected_status(err), StatusCode::CONFLICT);
}

#[tokio::test]
async fn review_socket_rejects_unknown_order() {
    let addr = serve(app(Arc::new(InMemoryOrderRepository::new()))).await;

    let err = tokio_tungstenite::connect_async(format!("ws://{}/ws/orders/{}", addr, OrderId::new()))
        .await
        .unwrap_err();

    assert_eq!(rejected_status(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn review_socket_runs_a_complete_conversation() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let (order, lines) = seed(&repository, OrderStatus::Completed, &["Tyre", "Wiper"]).await;
    let addr = serve(app(repository.clone())).await;

    let (mut socket, _) =
        tokio_tungstenite::connect_async(format!("ws://{}/ws/orders/{}", addr, order.id))
            .await
            .unwrap();

    assert!(next_text(&mut socket).await.starts_with("Hey Jane!"));

    assert!(next_text(&mut socket).await.contains("Tyre"));
    socket.send(Message::Text("ok".into())).await.unwrap();
    assert_eq!(next_text(&mut socket).await, "Happy to hear that!");

    assert!(next_text(&mut socket).await.contains("Wiper"));
    socket.send(Message::Text("bad".into())).await.unwrap();
    assert_eq!(next_text(&mut socket).await, "Sorry to hear that.");

    assert!(next_text(&mut socket).await.contains("Doe"));
    assert!(matches!(
        socket.next().await,
        Some(Ok(Message::Close(_))) | None
    ));

    assert_eq!(repository.review_score(&lines[0].id).await, Some(1));
    assert_eq!(repository.review_score(&lines[1].id).await, Some(-1));
    assert_eq!(
        repository.order_status(&order.id).await,
        Some(OrderStatus::Reviewed)
    );
}
