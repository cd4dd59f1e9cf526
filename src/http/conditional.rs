//! Conditional request handling
//!
//! `Last-Modified` formatting and `If-Modified-Since` evaluation.
//! Comparison is at second granularity, matching the precision of the
//! HTTP-date format itself.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Format a filesystem timestamp as an HTTP-date (IMF-fixdate, RFC 9110).
#[must_use]
pub fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Should the response be a 304, given the client's `If-Modified-Since`
/// header and the file's modification time?
///
/// Unparseable header values are ignored, as if the header were absent.
#[must_use]
pub fn not_modified(if_modified_since: Option<&str>, mtime: SystemTime) -> bool {
    let Some(header) = if_modified_since else {
        return false;
    };
    let Ok(since) = DateTime::parse_from_rfc2822(header) else {
        return false;
    };

    DateTime::<Utc>::from(mtime).timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn http_date_is_imf_fixdate() {
        let date = http_date(SystemTime::UNIX_EPOCH);
        assert_eq!(date, "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn round_trips_through_if_modified_since() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let header = http_date(mtime);
        assert!(not_modified(Some(&header), mtime));
    }

    #[test]
    fn newer_file_is_modified() {
        let since = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let mtime = since + Duration::from_secs(60);
        assert!(!not_modified(Some(&http_date(since)), mtime));
    }

    #[test]
    fn older_file_is_not_modified() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let since = mtime + Duration::from_secs(3600);
        assert!(not_modified(Some(&http_date(since)), mtime));
    }

    #[test]
    fn missing_or_garbage_header_is_ignored() {
        let mtime = SystemTime::UNIX_EPOCH;
        assert!(!not_modified(None, mtime));
        assert!(!not_modified(Some("last tuesday"), mtime));
    }
}
