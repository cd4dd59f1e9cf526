//! Static file responder
//!
//! Resolves a request path against the served root and produces the
//! response: file bytes, an index document, a generated listing, a
//! redirect, or an error status.

use crate::config::ServerConfig;
use crate::handler::listing;
use crate::handler::resolve;
use crate::handler::router::RequestContext;
use crate::http::range::RangeOutcome;
use crate::http::{self, conditional, mime, range};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Serve a request path from the configured root.
pub async fn serve(ctx: &RequestContext<'_>, config: &ServerConfig) -> Response<Full<Bytes>> {
    let Some(relative) = resolve::sanitize_path(ctx.path) else {
        return http::build_404_response();
    };
    let full_path = config.root.join(relative);

    let metadata = match fs::metadata(&full_path).await {
        Ok(m) => m,
        Err(e) => return error_response(&e, &full_path),
    };

    if metadata.is_dir() {
        return serve_dir(ctx, config, &full_path).await;
    }

    serve_regular_file(ctx, &full_path, &metadata).await
}

/// Serve a directory: redirect to the slashed form, then try index
/// documents, then fall back to a generated listing.
async fn serve_dir(
    ctx: &RequestContext<'_>,
    config: &ServerConfig,
    dir: &Path,
) -> Response<Full<Bytes>> {
    if !ctx.path.ends_with('/') {
        return http::build_redirect_response(&format!("{}/", ctx.path));
    }

    for index_file in &config.index_files {
        let candidate = dir.join(index_file);
        if let Ok(meta) = fs::metadata(&candidate).await {
            if meta.is_file() {
                return serve_regular_file(ctx, &candidate, &meta).await;
            }
        }
    }

    match listing::collect_entries(dir).await {
        Ok(entries) => {
            http::response::build_html_response(listing::render(ctx.path, &entries), ctx.is_head)
        }
        Err(e) => error_response(&e, dir),
    }
}

/// Serve a regular file with conditional and range handling.
async fn serve_regular_file(
    ctx: &RequestContext<'_>,
    path: &Path,
    metadata: &Metadata,
) -> Response<Full<Bytes>> {
    let mtime = metadata.modified().ok();

    if let Some(t) = mtime {
        if conditional::not_modified(ctx.if_modified_since.as_deref(), t) {
            return http::build_304_response();
        }
    }

    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => return error_response(&e, path),
    };

    let content_type = mime::content_type_for(path.extension().and_then(|e| e.to_str()));
    let last_modified = mtime.map(conditional::http_date);
    let total_size = content.len();

    match range::evaluate(ctx.range_header.as_deref(), total_size) {
        RangeOutcome::Satisfiable(r) => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(content[r.start..=r.end].to_vec())
            };
            http::response::build_partial_response(
                body,
                content_type,
                r,
                total_size,
                last_modified.as_deref(),
            )
        }
        RangeOutcome::Unsatisfiable => http::build_416_response(total_size),
        RangeOutcome::Ignored => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(content)
            };
            http::response::build_file_response(
                body,
                total_size,
                content_type,
                last_modified.as_deref(),
            )
        }
    }
}

/// Map a filesystem error to the response status. Not-found is common and
/// not worth logging; anything unexpected is.
fn error_response(err: &std::io::Error, path: &Path) -> Response<Full<Bytes>> {
    match err.kind() {
        ErrorKind::NotFound => http::build_404_response(),
        ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Permission denied: {}", path.display()));
            http::build_403_response()
        }
        _ => {
            logger::log_error(&format!("Failed to read '{}': {err}", path.display()));
            http::build_500_response()
        }
    }
}
