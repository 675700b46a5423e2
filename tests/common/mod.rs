//! Shared utilities for integration tests.

use std::net::SocketAddr;

use mock_external::config::{ListenerConfig, MockConfig};
use mock_external::lifecycle::{serve, Shutdown};
use mock_external::net;
use tokio::task::JoinHandle;

/// A mock server running on an ephemeral loopback port.
pub struct RunningServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
    handle: JoinHandle<()>,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger graceful shutdown and wait for the server task to finish.
    #[allow(dead_code)]
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle.await.unwrap();
    }
}

/// Start a server with default settings on `127.0.0.1:0`.
pub async fn start_server() -> RunningServer {
    start_server_with(MockConfig::default()).await
}

/// Start a server with `config`, overriding the listener with an ephemeral loopback port.
pub async fn start_server_with(mut config: MockConfig) -> RunningServer {
    config.listener = ListenerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let listener = net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        serve(config, listener, signal).await.unwrap();
    });

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}
