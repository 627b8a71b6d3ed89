// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::common::helpers::mask_emails;

/// Matches axum's default request body limit
const MAX_BUFFERED_BODY: usize = 2 * 1024 * 1024;

/// Renders a body for the log, masking email fields in JSON payloads
fn render_body(bytes: &Bytes) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;

    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(mut json) => {
            mask_emails(&mut json);
            Some(serde_json::to_string_pretty(&json).unwrap_or_else(|_| text.to_string()))
        }
        Err(_) => Some(text.to_string()),
    }
}

async fn buffer(body: Body, on_error: StatusCode) -> Result<Bytes, StatusCode> {
    to_bytes(body, MAX_BUFFERED_BODY).await.map_err(|e| {
        debug!(error = %e, status = %on_error, "Failed to buffer body for logging");
        on_error
    })
}

/// Middleware to log request and response bodies in debug mode
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();
    let bytes = buffer(body, StatusCode::PAYLOAD_TOO_LARGE).await?;

    if let Some(rendered) = render_body(&bytes) {
        debug!(
            method = %parts.method,
            uri = %parts.uri,
            request_body = %rendered,
            "📥 Request"
        );
    }

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (parts, body) = response.into_parts();
    let bytes = buffer(body, StatusCode::INTERNAL_SERVER_ERROR).await?;

    if let Some(rendered) = render_body(&bytes) {
        debug!(
            status = %parts.status,
            response_body = %rendered,
            "📤 Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
