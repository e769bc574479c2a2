//! Request ID Middleware
//!
//! Tags each request with an id taken from the `x-request-id` header, or a
//! fresh UUID when the caller sent none. The id is stored in the request
//! extensions, attached to the request's tracing span, and echoed back on
//! the response.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for request ID
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Use the caller's id when it is a valid header value, otherwise generate one
    fn from_request(request: &Request<Body>) -> Self {
        request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .map_or_else(|| Self(Uuid::new_v4().to_string()), |s| Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Middleware that runs the rest of the stack inside a per-request span
pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let request_id = RequestId::from_request(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    request.extensions_mut().insert(request_id.clone());

    let mut response = async move {
        tracing::debug!("Processing request");
        next.run(request).await
    }
    .instrument(span)
    .await;

    if let Ok(header_value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), header_value);
    }

    response
}
