// Server configuration
// Root directory and listen port are compile-time constants; changing them
// requires a rebuild. No file, flag, or environment input.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Directory the server exposes, relative to the working directory at startup.
pub const STATIC_FILES_DIR: &str = "./";

/// TCP port the listener binds on all interfaces.
pub const PORT: u16 = 8080;

/// Index file candidates tried when a request path resolves to a directory.
pub const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Configuration for one server instance.
///
/// An explicit value owned by the server rather than a process-wide global,
/// so tests can run independent instances against temporary roots and
/// ephemeral ports.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Root directory all servable files must reside under.
    pub root_dir: PathBuf,
    /// Address the listener binds to.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// The fixed configuration the binary runs with.
    #[must_use]
    pub fn fixed() -> Self {
        Self {
            root_dir: PathBuf::from(STATIC_FILES_DIR),
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), PORT),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::fixed()
    }
}
