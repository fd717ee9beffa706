//! Byte-to-text decoding under an explicit [`InvalidUtf8`] policy.

use crate::config::InvalidUtf8;

const BOM: &str = "\u{feff}";

/// Decode raw file bytes as UTF-8.
///
/// Never fails: invalid sequences are dropped or replaced according to
/// `policy`. A leading byte-order mark is removed.
pub fn decode(bytes: &[u8], policy: InvalidUtf8) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() && policy == InvalidUtf8::Replace {
            text.push(char::REPLACEMENT_CHARACTER);
        }
    }
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
