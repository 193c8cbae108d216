//! Object metadata and the read-time merge with provider head fields.

use std::collections::BTreeMap;

use jiff::Timestamp;
use jiff::fmt::rfc2822::DateTimePrinter;

use crate::error::Result;

/// User metadata attached to an object, ordered by key.
pub type Metadata = BTreeMap<String, String>;

/// Metadata key carrying the provider's content hash.
pub const HEAD_ETAG: &str = "head_ETag";

/// Metadata key carrying the provider's last-modified time as an HTTP-date.
pub const HEAD_LAST_MODIFIED: &str = "head_Last-Modified";

/// Renders `timestamp` as an HTTP-date, e.g. `Mon, 11 Apr 2016 10:39:57 GMT`.
///
/// Sub-second precision is dropped.
pub fn http_date(timestamp: &Timestamp) -> Result<String> {
    static PRINTER: DateTimePrinter = DateTimePrinter::new();
    Ok(PRINTER.timestamp_to_rfc9110_string(timestamp)?)
}

/// Merges user metadata with the synthesized head entries.
///
/// User entries are applied first; [`HEAD_ETAG`] and [`HEAD_LAST_MODIFIED`]
/// are applied last and replace same-named user entries.
pub fn merge(user: Metadata, e_tag: Option<&str>, last_modified: &Timestamp) -> Result<Metadata> {
    let head = [
        (HEAD_ETAG, e_tag.unwrap_or_default().to_owned()),
        (HEAD_LAST_MODIFIED, http_date(last_modified)?),
    ];

    let mut merged = user;
    merged.extend(head.into_iter().map(|(key, value)| (key.to_owned(), value)));
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_modified() -> Timestamp {
        "2016-04-11T10:39:57Z".parse().unwrap()
    }

    #[test]
    fn http_date_format() {
        assert_eq!(
            http_date(&last_modified()).unwrap(),
            "Mon, 11 Apr 2016 10:39:57 GMT"
        );
    }

    #[test]
    fn http_date_drops_fractional_seconds() {
        let ts: Timestamp = "2016-04-11T10:39:57.987654Z".parse().unwrap();
        assert_eq!(http_date(&ts).unwrap(), "Mon, 11 Apr 2016 10:39:57 GMT");
    }

    #[test]
    fn merge_adds_head_entries() {
        let user = Metadata::from([("foo".to_owned(), "bar".to_owned())]);
        let merged = merge(user, Some("foo_123"), &last_modified()).unwrap();

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["foo"], "bar");
        assert_eq!(merged[HEAD_ETAG], "foo_123");
        assert_eq!(merged[HEAD_LAST_MODIFIED], "Mon, 11 Apr 2016 10:39:57 GMT");
    }

    #[test]
    fn merge_with_no_user_metadata() {
        let merged = merge(Metadata::new(), Some("foo_123"), &last_modified()).unwrap();
        assert_eq!(
            merged.keys().collect::<Vec<_>>(),
            vec![HEAD_ETAG, HEAD_LAST_MODIFIED]
        );
    }

    #[test]
    fn head_entries_win_on_collision() {
        let user = Metadata::from([
            (HEAD_ETAG.to_owned(), "stale".to_owned()),
            (HEAD_LAST_MODIFIED.to_owned(), "yesterday".to_owned()),
        ]);
        let merged = merge(user, Some("fresh"), &last_modified()).unwrap();

        assert_eq!(merged[HEAD_ETAG], "fresh");
        assert_eq!(merged[HEAD_LAST_MODIFIED], "Mon, 11 Apr 2016 10:39:57 GMT");
    }

    #[test]
    fn missing_etag_is_empty() {
        let merged = merge(Metadata::new(), None, &last_modified()).unwrap();
        assert_eq!(merged[HEAD_ETAG], "");
    }
}
