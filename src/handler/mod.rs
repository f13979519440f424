//! Request handler module
//!
//! Entry point for HTTP request processing: single catch-all route that maps
//! the request path onto the configured root directory.

pub mod static_files;

use crate::config::ServerConfig;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<ServerConfig>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    logger::log_request(method, uri, req.version());

    match method {
        &Method::GET | &Method::HEAD => {}
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return Ok(http::build_405_response());
        }
    }

    let is_head = *method == Method::HEAD;
    Ok(static_files::serve(&config, uri.path(), is_head).await)
}
