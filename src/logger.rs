// Logging helpers
// Timestamped lines to stdout (access/info) and stderr (warnings/errors)

use crate::config::Config;
use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;
use std::path::Path;

/// Local timestamp for log lines, e.g. `2026-08-30 14:02:11`
fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Visit counter server started");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Web root: {}", config.resources.web_root);
    println!("Visit record: {}", config.counter.record_file);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_counter_loaded(path: &Path, total: u64) {
    println!(
        "[{}] [Counter] Loaded visit total {} from {}",
        timestamp(),
        total,
        path.display()
    );
}

pub fn log_persist_error(path: &Path, message: &str) {
    eprintln!(
        "[{}] [Counter] {} ({})",
        timestamp(),
        message,
        path.display()
    );
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] [Connection] Accepted from: {peer_addr}", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!(
        "[{}] [ERROR] Failed to serve connection: {err:?}",
        timestamp()
    );
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[{}] [Request] {method} {uri} {version:?}", timestamp());
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[{}] [Headers] Count: {count}", timestamp());
    }
}

pub fn log_response(status: u16, size: usize) {
    println!("[{}] [Response] {status} ({size} bytes)", timestamp());
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    println!("[{}] [API] {method} {path} - {status}", timestamp());
}

pub fn log_warning(message: &str) {
    eprintln!("[{}] [WARN] {message}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}
