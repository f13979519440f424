//! A minimal static file server.
//!
//! Binds an HTTP/1.1 listener on a fixed port and serves files from a fixed
//! directory by joining each request path onto that directory. One catch-all
//! handler, no caching, no runtime configuration.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::ServerConfig;
pub use error::ServerError;
