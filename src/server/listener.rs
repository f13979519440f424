// Listener module
// Binds the TCP listener the server accepts connections on

use crate::error::ServerError;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind a `TcpListener` on the given address.
///
/// A plain bind with no address reuse: a second instance on the same port
/// fails here, and the caller decides whether to terminate.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}
