//! servedir — a static file server for the current working directory.
//!
//! Binds a TCP listener on port 8080 and serves the process's working
//! directory over HTTP/1.1: files, index documents, and generated
//! directory listings. No TLS, no routing table, no configurability.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
