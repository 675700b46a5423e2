//! Response construction.
//!
//! # Responsibilities
//! - Build the fixed success payload for recognised routes
//! - Map request errors to HTTP status codes with a JSON error body
//!
//! # Design Decisions
//! - `MalformedBody` and unreadable bodies are 400, oversize bodies are 413
//! - Not-found and method-not-allowed responses stay the framework defaults

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::http::request::RequestError;

/// Body returned by every recognised route.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusOk {
    status: &'static str,
}

impl StatusOk {
    pub const fn new() -> Self {
        Self { status: "ok" }
    }
}

impl IntoResponse for StatusOk {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MalformedBody(_) | RequestError::BodyRead(_) => StatusCode::BAD_REQUEST,
            RequestError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    #[tokio::test]
    async fn ok_payload_is_exact() {
        let response = StatusOk::new().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn malformed_body_is_400_json() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let response = RequestError::MalformedBody(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("malformed JSON body"));
    }

    #[test]
    fn oversize_is_413() {
        let err = RequestError::BodyTooLarge { limit: 10 };
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
