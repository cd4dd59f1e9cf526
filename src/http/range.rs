//! HTTP Range request evaluation
//!
//! Single-range `bytes=` parsing per RFC 7233. Multi-range and malformed
//! headers are ignored rather than rejected, so the request falls back to
//! a full 200 response.

/// A resolved byte range, inclusive on both ends and already clamped to
/// the file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    /// Number of bytes in the range (start <= end always holds).
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Outcome of evaluating a Range header against a file of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// Serve a 206 with this slice
    Satisfiable(ByteRange),
    /// Serve a 416 (start past end of file, or empty suffix)
    Unsatisfiable,
    /// No usable Range header; serve the full file
    Ignored,
}

/// Evaluate a Range header value against `file_size`.
///
/// Supported forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
///
/// # Examples
/// ```
/// use servedir::http::range::{evaluate, ByteRange, RangeOutcome};
///
/// assert_eq!(
///     evaluate(Some("bytes=0-2"), 10),
///     RangeOutcome::Satisfiable(ByteRange { start: 0, end: 2 })
/// );
/// assert_eq!(evaluate(None, 10), RangeOutcome::Ignored);
/// ```
#[must_use]
pub fn evaluate(header: Option<&str>, file_size: usize) -> RangeOutcome {
    let Some(spec) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Ignored;
    };

    // Multi-range responses (multipart/byteranges) are not supported
    if spec.contains(',') {
        return RangeOutcome::Ignored;
    }

    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeOutcome::Ignored;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        return evaluate_suffix(end_str, file_size);
    }

    let Ok(start) = start_str.parse::<usize>() else {
        return RangeOutcome::Ignored;
    };
    if start >= file_size {
        return RangeOutcome::Unsatisfiable;
    }

    let end = if end_str.is_empty() {
        file_size - 1
    } else {
        let Ok(end) = end_str.parse::<usize>() else {
            return RangeOutcome::Ignored;
        };
        if end < start {
            return RangeOutcome::Unsatisfiable;
        }
        end.min(file_size - 1)
    };

    RangeOutcome::Satisfiable(ByteRange { start, end })
}

/// `bytes=-N`: the last N bytes of the file.
fn evaluate_suffix(suffix_str: &str, file_size: usize) -> RangeOutcome {
    let Ok(suffix) = suffix_str.parse::<usize>() else {
        return RangeOutcome::Ignored;
    };
    if suffix == 0 || file_size == 0 {
        return RangeOutcome::Unsatisfiable;
    }

    // A suffix longer than the file means the whole file
    RangeOutcome::Satisfiable(ByteRange {
        start: file_size.saturating_sub(suffix),
        end: file_size - 1,
    })
}
