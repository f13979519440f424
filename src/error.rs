//! Server error types
//!
//! Only failures the server itself produces live here. File-access outcomes
//! during serving (missing file, not a regular file, unreadable) surface as
//! 404 responses instead of errors.

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be created at startup. Fatal: the caller is
    /// expected to log and terminate the process.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The configured root directory could not be resolved to an absolute
    /// path while handling a request. Recovered per-request with a 500
    /// response; the process keeps serving.
    #[error("failed to resolve root directory '{root}': {source}")]
    RootResolve {
        root: String,
        #[source]
        source: std::io::Error,
    },
}
