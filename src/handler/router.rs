//! Request dispatch
//!
//! Entry point for HTTP request processing: method gate, context
//! extraction, the static file responder, and optional access logging.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context for the static file responder.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_modified_since: Option<String>,
    pub range_header: Option<String>,
}

/// Handle one HTTP request. Infallible: every failure becomes a status
/// code, never a broken connection.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    if let Some(resp) = check_http_method(method) {
        return Ok(log_and_return(&state, &req, peer_addr, resp));
    }

    let ctx = RequestContext {
        path,
        is_head,
        if_modified_since: header_value(&req, "if-modified-since"),
        range_header: header_value(&req, "range"),
    };

    let response = static_files::serve(&ctx, &state.config).await;
    Ok(log_and_return(&state, &req, peer_addr, response))
}

/// Only GET and HEAD are served; OPTIONS is answered, the rest get 405.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Emit the access log line when enabled, then pass the response through.
fn log_and_return<B>(
    state: &Arc<AppState>,
    req: &Request<B>,
    peer_addr: SocketAddr,
    response: Response<Full<Bytes>>,
) -> Response<Full<Bytes>> {
    if state.config.access_log {
        let mut entry = logger::AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.http_version = format!("{:?}", req.version())
            .trim_start_matches("HTTP/")
            .to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        logger::log_access(&entry);
    }
    response
}
