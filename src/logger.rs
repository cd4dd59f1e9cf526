//! Logger module
//!
//! Console logging for the server: a startup banner, error/warning
//! helpers, and optional per-request access logging in Common Log Format.

use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

/// Announce the listening address at startup.
pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("Serving {} on http://{addr}", root.display());
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Log a failed connection. Client disconnects mid-response end up here;
/// they are request-local and never affect process health.
pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// One served request, for access logging.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
}

impl AccessLogEntry {
    #[must_use]
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF):
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    #[must_use]
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_format_has_request_line_and_status() {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_string(),
            "GET".to_string(),
            "/data/report.txt".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 3;

        let line = entry.format_common();
        assert!(line.starts_with("127.0.0.1 - - ["));
        assert!(line.contains("\"GET /data/report.txt HTTP/1.1\""));
        assert!(line.ends_with(" 200 3"));
    }
}
