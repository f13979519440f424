// Server module entry point
// Provides listener binding, the accept loop, and per-connection serving

pub mod connection;
pub mod listener;

pub use listener::bind;

use crate::config::ServerConfig;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept loop for a bound listener.
///
/// Each accepted connection is served on its own task; accept errors are
/// logged and the loop continues. Never returns: the listener lives for the
/// rest of the process.
pub async fn run(listener: TcpListener, config: Arc<ServerConfig>) {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                connection::handle_connection(stream, Arc::clone(&config));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
