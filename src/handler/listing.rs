//! Directory listing generation
//!
//! Renders an HTML page naming every immediate child of a directory.
//! Directories are suffixed with `/` and sorted before files.

use std::path::Path;
use tokio::fs;

/// One child of the listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read a directory's immediate children, directories first, then by name.
pub async fn collect_entries(dir: &Path) -> std::io::Result<Vec<ListingEntry>> {
    let mut entries = Vec::new();
    let mut reader = fs::read_dir(dir).await?;

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);
        entries.push(ListingEntry { name, is_dir });
    }

    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}

/// Render the listing page for a request path and its collected entries.
#[must_use]
pub fn render(request_path: &str, entries: &[ListingEntry]) -> String {
    let title = escape_html(request_path);
    let mut html = String::with_capacity(512 + entries.len() * 64);

    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Index of ");
    html.push_str(&title);
    html.push_str("</title></head>\n<body>\n<h1>Index of ");
    html.push_str(&title);
    html.push_str("</h1>\n<hr>\n<pre>\n");

    if request_path != "/" {
        html.push_str("<a href=\"../\">../</a>\n");
    }

    for entry in entries {
        let display = if entry.is_dir {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        html.push_str("<a href=\"");
        html.push_str(&escape_href(&display));
        html.push_str("\">");
        html.push_str(&escape_html(&display));
        html.push_str("</a>\n");
    }

    html.push_str("</pre>\n<hr>\n</body>\n</html>\n");
    html
}

/// Escape text for inclusion in HTML content.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Percent-encode a file name for use in an href attribute.
///
/// Encodes over the name's UTF-8 bytes so the link decodes back to the
/// exact filename; unreserved ASCII and `/` (the directory suffix) pass
/// through.
fn escape_href(name: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(name.len());
    for &byte in name.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(char::from(byte));
            }
            b => {
                out.push('%');
                out.push(char::from(HEX[usize::from(b >> 4)]));
                out.push(char::from(HEX[usize::from(b & 0x0F)]));
            }
        }
    }
    out
}
