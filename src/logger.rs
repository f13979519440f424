//! Logger module
//!
//! Provides logging utilities for the HTTP server:
//! - Server lifecycle logging
//! - Per-request access logging
//! - Error and warning logging
//!
//! Info lines go to stdout, warnings and errors to stderr, all prefixed with
//! an Apache-style local timestamp.

use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

/// Timestamp prefix shared by every log line.
fn timestamp() -> String {
    Local::now().format("[%d/%b/%Y:%H:%M:%S %z]").to_string()
}

fn write_info(message: &str) {
    println!("{} {message}", timestamp());
}

fn write_error(message: &str) {
    eprintln!("{} {message}", timestamp());
}

pub fn log_server_start(addr: &SocketAddr, root_dir: &Path) {
    write_info("======================================");
    write_info("Static file server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Serving directory: {}", root_dir.display()));
    write_info("Using Tokio runtime for concurrency");
    write_info("======================================");
}

pub fn log_request(method: &hyper::Method, uri: &hyper::Uri, version: hyper::Version) {
    write_info(&format!("[Request] {method} {uri} {version:?}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_fatal(message: &str) {
    write_error(&format!("[FATAL] {message}"));
}
