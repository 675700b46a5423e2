//! TCP listener setup.
//!
//! # Responsibilities
//! - Resolve the configured host and port
//! - Bind the listening socket
//! - Classify bind failures (address in use, permission denied)

use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for binding the listener.
#[derive(Debug, Error)]
pub enum BindError {
    /// Host is not a literal IP address.
    #[error("Invalid listen address `{address}`")]
    InvalidAddress { address: String },

    /// Another process already holds the port.
    #[error("Address {address} already in use")]
    AddrInUse {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Privileged port or similar OS refusal.
    #[error("Permission denied binding {address}")]
    PermissionDenied {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to bind {address}: {source}")]
    Io {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind a TCP listener for the configured host and port.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, BindError> {
    let ip: IpAddr = config.host.parse().map_err(|_| BindError::InvalidAddress {
        address: config.bind_address(),
    })?;
    let address = SocketAddr::new(ip, config.port);

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::AddrInUse => BindError::AddrInUse { address, source },
            ErrorKind::PermissionDenied => BindError::PermissionDenied { address, source },
            _ => BindError::Io { address, source },
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::debug!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
