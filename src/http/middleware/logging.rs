//! Request logging step of the pipeline.
//!
//! Every request passes through [`log_requests`] before route dispatch:
//! the body is buffered and parsed, a [`RequestRecord`] is logged, and
//! only requests with a usable body reach the router. Rejected bodies are
//! answered here with 400 or 413.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use crate::config::LimitsConfig;
use crate::http::request::{parse_body, read_body, RequestRecord};

pub async fn log_requests(
    State(limits): State<LimitsConfig>,
    request: Request,
    next: Next,
) -> Response {
    let timestamp = Utc::now();
    let (parts, body) = request.into_parts();

    let (bytes, body) = match read_body(body, limits.body_limit_bytes).await {
        Ok(bytes) => {
            let parsed = parse_body(&bytes);
            (bytes, parsed)
        }
        Err(err) => (Default::default(), Err(err)),
    };

    let record = RequestRecord::new(timestamp, &parts, body);
    log_record(&record);

    match record.body {
        Ok(_) => next.run(Request::from_parts(parts, Body::from(bytes))).await,
        Err(err) => {
            tracing::warn!(status = %err.status(), error = %err, "Rejecting request body");
            err.into_response()
        }
    }
}

/// Emit the record: one line with timestamp, method and path, then headers and body.
fn log_record(record: &RequestRecord) {
    tracing::info!(
        request_id = record.request_id.as_deref().unwrap_or("-"),
        "{} - {} {}",
        record.timestamp_string(),
        record.method,
        record.path
    );
    tracing::info!("Headers: {}", record.headers_json());
    tracing::info!("Body: {}", record.body_display());
}
