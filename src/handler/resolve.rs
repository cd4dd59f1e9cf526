//! URL path resolution
//!
//! Percent-decodes a request path and normalizes it into a relative
//! filesystem path under the served root. `.` segments are dropped and
//! `..` segments pop the previous segment, clamping at the root, so the
//! result can never escape the root directory.

use std::path::PathBuf;

/// Normalize a URL path into a root-relative filesystem path.
///
/// The path is percent-decoded first, so a listing href like
/// `my%20file.txt` resolves back to the file it names. Returns `None`
/// for paths that cannot name a filesystem entry: truncated or non-hex
/// percent escapes, decoded bytes that are not UTF-8, or embedded NUL.
/// An empty result names the root itself.
///
/// # Examples
/// ```
/// use servedir::handler::resolve::sanitize_path;
/// use std::path::PathBuf;
///
/// assert_eq!(sanitize_path("/a/b.txt"), Some(PathBuf::from("a/b.txt")));
/// assert_eq!(sanitize_path("/my%20file.txt"), Some(PathBuf::from("my file.txt")));
/// assert_eq!(sanitize_path("/../../etc/passwd"), Some(PathBuf::from("etc/passwd")));
/// assert_eq!(sanitize_path("/"), Some(PathBuf::new()));
/// ```
#[must_use]
pub fn sanitize_path(raw: &str) -> Option<PathBuf> {
    let decoded = percent_decode(raw)?;
    if decoded.contains('\0') {
        return None;
    }

    let mut segments: Vec<String> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // Clamp at the root: excess ".." segments are discarded
                segments.pop();
            }
            s => segments.push(s.to_string()),
        }
    }

    Some(segments.iter().collect())
}

/// Decode `%XX` escapes, requiring the result to be valid UTF-8.
fn percent_decode(raw: &str) -> Option<String> {
    if !raw.contains('%') {
        return Some(raw.to_string());
    }

    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = hex_value(*bytes.get(i + 1)?)?;
            let lo = hex_value(*bytes.get(i + 2)?)?;
            out.push((hi << 4) | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out).ok()
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(sanitize_path("/index.html"), Some(PathBuf::from("index.html")));
        assert_eq!(
            sanitize_path("/data/report.txt"),
            Some(PathBuf::from("data/report.txt"))
        );
    }

    #[test]
    fn root_resolves_to_empty() {
        assert_eq!(sanitize_path("/"), Some(PathBuf::new()));
        assert_eq!(sanitize_path(""), Some(PathBuf::new()));
    }

    #[test]
    fn dot_segments_and_duplicate_slashes_collapse() {
        assert_eq!(sanitize_path("/a/./b//c"), Some(PathBuf::from("a/b/c")));
        assert_eq!(sanitize_path("/a/b/../c"), Some(PathBuf::from("a/c")));
    }

    #[test]
    fn traversal_is_clamped_at_the_root() {
        assert_eq!(
            sanitize_path("/../../etc/passwd"),
            Some(PathBuf::from("etc/passwd"))
        );
        assert_eq!(sanitize_path("/.."), Some(PathBuf::new()));
        assert_eq!(sanitize_path("/a/../../.."), Some(PathBuf::new()));
    }

    #[test]
    fn percent_escapes_decode_to_filenames() {
        assert_eq!(
            sanitize_path("/my%20file.txt"),
            Some(PathBuf::from("my file.txt"))
        );
        assert_eq!(
            sanitize_path("/caf%C3%A9.txt"),
            Some(PathBuf::from("café.txt"))
        );
        // Encoded dot segments still normalize after decoding
        assert_eq!(
            sanitize_path("/%2e%2e/%2e%2e/etc/passwd"),
            Some(PathBuf::from("etc/passwd"))
        );
    }

    #[test]
    fn bad_escapes_are_rejected() {
        assert_eq!(sanitize_path("/a%zzb"), None);
        assert_eq!(sanitize_path("/trailing%2"), None);
        assert_eq!(sanitize_path("/trailing%"), None);
        // Decodes to invalid UTF-8
        assert_eq!(sanitize_path("/%ff%fe"), None);
    }

    #[test]
    fn nul_bytes_are_rejected() {
        assert_eq!(sanitize_path("/a\0b"), None);
        assert_eq!(sanitize_path("/a%00b"), None);
    }
}
