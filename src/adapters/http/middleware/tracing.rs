//! Request ids and request spans.

use axum::extract::Request;
use ::tracing::Span;

/// Header carrying the request id, set on the request and echoed on the
/// response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span for one HTTP request, tagged with its request id.
pub fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    ::tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
