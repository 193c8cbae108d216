//! Mapping between object keys and [`object_store`] paths.
//!
//! [`Path`] percent-encodes reserved characters of every segment and drops
//! empty segments. Keys go in through [`key_to_path`], which refuses the keys
//! that would lose their identity, and come back out through [`path_to_key`],
//! which undoes the encoding.

use object_store::path::{DELIMITER, Path};

use crate::error::{Error, Result};

/// Converts `key` to the path it is stored under.
///
/// Keys with an empty segment (`a//b`, `/a`, `a/`, or the empty key) would be
/// aliased onto another key by [`Path`] and are rejected.
pub(super) fn key_to_path(key: &str) -> Result<Path> {
    if key.split(DELIMITER).any(str::is_empty) {
        return Err(Error::invalid_key(key, "empty path segment"));
    }
    Ok(Path::from(key))
}

/// Recovers the key a listed or deleted `path` was stored under.
pub(super) fn path_to_key(path: &Path) -> String {
    path.parts()
        .map(|part| decode_part(part.as_ref()))
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

fn decode_part(part: &str) -> String {
    let bytes = part.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(&[hi, lo]) = bytes.get(i + 1..i + 3)
            && let (Some(hi), Some(lo)) = (hex_value(hi), hex_value(lo))
        {
            decoded.push(hi << 4 | lo);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|value| value as u8)
}
