//! Request capture and body parsing.
//!
//! # Responsibilities
//! - Buffer the request body up to the configured limit
//! - Parse a present body as JSON; an empty body becomes `{}`
//! - Build the transient `RequestRecord` that gets logged
//!
//! # Design Decisions
//! - JSON parsing is attempted whenever a body is present, whatever the
//!   `Content-Type` says
//! - Header values that are not UTF-8 are decoded lossily for logging

use std::collections::BTreeMap;

use axum::body::{Body, Bytes};
use axum::http::request::Parts;
use axum::http::Method;
use chrono::{DateTime, SecondsFormat, Utc};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde_json::{Map, Value};
use thiserror::Error;
use tower_http::request_id::RequestId;

/// Errors raised while reading or parsing a request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    BodyRead(String),
}

/// Buffer `body`, failing with `BodyTooLarge` past `limit` bytes.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, RequestError> {
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            Err(RequestError::BodyTooLarge { limit })
        }
        Err(err) => Err(RequestError::BodyRead(err.to_string())),
    }
}

/// Parse a buffered body. Empty or whitespace-only bodies count as absent.
pub fn parse_body(bytes: &[u8]) -> Result<Value, RequestError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Transient, logged view of one incoming request.
#[derive(Debug)]
pub struct RequestRecord {
    pub timestamp: DateTime<Utc>,
    pub method: Method,
    pub path: String,
    /// Lower-case header name to every value sent under it, in arrival order.
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: Result<Value, RequestError>,
    pub request_id: Option<String>,
}

impl RequestRecord {
    pub fn new(timestamp: DateTime<Utc>, parts: &Parts, body: Result<Value, RequestError>) -> Self {
        let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in &parts.headers {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        let request_id = parts
            .extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .map(str::to_string);

        Self {
            timestamp,
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            headers,
            body,
            request_id,
        }
    }

    /// RFC 3339 timestamp with millisecond precision, e.g. `2024-01-01T10:00:00.000Z`.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Headers as a JSON object; single values stay strings, repeated ones become arrays.
    pub fn headers_json(&self) -> Value {
        let map = self
            .headers
            .iter()
            .map(|(name, values)| {
                let value = match values.as_slice() {
                    [single] => Value::String(single.clone()),
                    many => Value::Array(many.iter().cloned().map(Value::String).collect()),
                };
                (name.clone(), value)
            })
            .collect::<Map<_, _>>();
        Value::Object(map)
    }

    /// Pretty-printed body, or a bracketed note when it could not be read.
    pub fn body_display(&self) -> String {
        match &self.body {
            Ok(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            Err(err) => format!("<{err}>"),
        }
    }
}
