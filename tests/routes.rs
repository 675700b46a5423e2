//! End-to-end tests against a mock server on a real socket.

use mock_external::config::{ListenerConfig, MockConfig};
use mock_external::net::{self, BindError};
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

const ROUTES: [&str; 3] = ["/doctor-calendar", "/room-reservation", "/email-notification"];

#[tokio::test]
async fn recognised_routes_return_ok_payload() {
    let server = common::start_server().await;
    let client = common::client();

    for path in ROUTES {
        let res = client
            .post(server.url(path))
            .json(&json!({}))
            .send()
            .await
            .expect("server unreachable");

        assert_eq!(res.status(), StatusCode::OK, "{path}");
        assert_eq!(
            res.headers()["content-type"],
            "application/json",
            "{path}"
        );
        assert_eq!(res.text().await.unwrap(), r#"{"status":"ok"}"#);
    }

    server.stop().await;
}

#[tokio::test]
async fn doctor_calendar_with_booking_body() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/doctor-calendar"))
        .json(&json!({"patient": "Jane", "date": "2024-01-01"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn room_reservation_with_empty_body() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/room-reservation"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let server = common::start_server().await;
    let client = common::client();

    for path in ROUTES {
        let res = client
            .post(server.url(path))
            .header("content-type", "application/json")
            .body("not json")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}");
    }

    // The server keeps serving after a rejected body.
    let res = client
        .post(server.url("/email-notification"))
        .json(&json!({"to": "jane@example.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_on_recognised_route_is_not_ok() {
    let server = common::start_server().await;
    let client = common::client();

    for path in ROUTES {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_ne!(res.status(), StatusCode::OK, "{path}");
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{path}");
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/unknown"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversize_body_is_payload_too_large() {
    let mut config = MockConfig::default();
    config.limits.body_limit_bytes = 64;
    let server = common::start_server_with(config).await;

    let res = common::client()
        .post(server.url("/doctor-calendar"))
        .json(&json!({"notes": "x".repeat(256)}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn request_id_round_trips() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/email-notification"))
        .header("x-request-id", "appointment-7")
        .send()
        .await
        .unwrap();

    assert_eq!(res.headers()["x-request-id"], "appointment-7");
}

#[tokio::test]
async fn concurrent_requests_all_succeed() {
    let server = common::start_server().await;
    let client = common::client();

    let requests = (0..32).map(|i| {
        let client = client.clone();
        let url = server.url(ROUTES[i % ROUTES.len()]);
        async move {
            client
                .post(url)
                .json(&json!({"n": i}))
                .send()
                .await
                .unwrap()
                .status()
        }
    });

    for status in spawn_all(requests).await {
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn occupied_port_is_bind_error() {
    let server = common::start_server().await;

    let err = net::bind(&ListenerConfig {
        host: "127.0.0.1".to_string(),
        port: server.addr.port(),
    })
    .await
    .unwrap_err();

    assert!(matches!(err, BindError::AddrInUse { .. }), "got {err}");
}

async fn spawn_all<F>(futures: impl Iterator<Item = F>) -> Vec<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut outputs = Vec::with_capacity(handles.len());
    for handle in handles {
        outputs.push(handle.await.unwrap());
    }
    outputs
}
