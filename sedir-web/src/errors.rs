//! Error types for the web server.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that stop the server from starting or serving.
///
/// Request handling itself does not fail: search errors are logged and
/// rendered as an empty result list.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
