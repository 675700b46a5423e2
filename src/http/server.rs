//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the fixed routes
//! - Wire up middleware (request ID, logging pipeline)
//! - Serve connections on a bound listener until shutdown

use axum::{middleware, routing::post, Router};
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::config::MockConfig;
use crate::http::middleware::log_requests;
use crate::http::response::StatusOk;
use crate::lifecycle::ShutdownSignal;
use crate::routing::Route;

/// Build the router: fixed POST routes wrapped in the logging pipeline.
///
/// Layers apply outermost-last, so a request sees: request ID assignment,
/// request ID propagation, logging, then route dispatch.
pub fn build_router(config: &MockConfig) -> Router {
    let mut router = Router::new();
    for route in Route::ALL {
        router = router.route(route.path(), post(move || respond_ok(route)));
    }

    router
        .layer(middleware::from_fn_with_state(
            config.limits.clone(),
            log_requests,
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn respond_ok(route: Route) -> StatusOk {
    tracing::info!("Responding to {} with 200 OK", route.path());
    StatusOk::new()
}

/// HTTP server for the mock endpoints.
pub struct MockServer {
    router: Router,
}

impl MockServer {
    /// Create a new server with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        Self {
            router: build_router(&config),
        }
    }

    /// Serve `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::debug!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::debug!("HTTP server stopped");
        Ok(())
    }
}
