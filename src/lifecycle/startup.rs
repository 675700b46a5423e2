//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener from the explicit `MockConfig`
//! - Announce readiness once the port is bound
//! - Serve until an OS shutdown signal arrives

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::MockConfig;
use crate::http::MockServer;
use crate::lifecycle::shutdown::{Shutdown, ShutdownSignal};
use crate::lifecycle::signals::shutdown_signal;
use crate::net::{self, BindError};

/// Fatal server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bind and serve until SIGINT/SIGTERM.
pub async fn start(config: MockConfig) -> Result<(), ServerError> {
    let listener = net::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    serve(config, listener, signal).await
}

/// Serve on an already-bound listener until `signal` fires.
pub async fn serve(
    config: MockConfig,
    listener: TcpListener,
    signal: ShutdownSignal,
) -> Result<(), ServerError> {
    let local_addr: SocketAddr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        body_limit_bytes = config.limits.body_limit_bytes,
        "Mock external server listening on {}",
        local_addr.port()
    );

    MockServer::new(config).run(listener, signal).await?;
    Ok(())
}
