//! Byte-level scanning over the raw document.
//!
//! The certificate template is fixed enough that content streams and
//! text-show operators can be located by marker search alone, without
//! parsing the PDF object graph.

/// Content stream delimiters.
pub const STREAM_BEGIN: &[u8] = b"stream\n";
pub const STREAM_END: &[u8] = b"\nendstream";

/// Text-show operator delimiters within a decompressed stream.
pub const TEXT_BEGIN: &[u8] = b"\n(";
pub const TEXT_END: &[u8] = b")Tj\n";

/// Find the lowest index `i >= from` at which `needle` occurs in
/// `haystack`, or `None`.
///
/// A needle longer than the remaining haystack never matches; an empty
/// haystack never matches.
pub fn find_sequence(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if haystack.is_empty() || needle.is_empty() || from >= haystack.len() {
        return None;
    }

    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Extract all sections delimited by `begin` and `end`, in document
/// order, excluding the markers themselves.
///
/// A failed search for either marker is the normal terminal condition,
/// not an error. The cursor advances past each end marker, so sections
/// never overlap.
pub fn extract_sections<'a>(buffer: &'a [u8], begin: &[u8], end: &[u8]) -> Vec<&'a [u8]> {
    let mut sections = Vec::new();
    let mut cursor = 0;

    while let Some(begin_at) = find_sequence(buffer, begin, cursor) {
        let body_at = begin_at + begin.len();
        let Some(end_at) = find_sequence(buffer, end, body_at) else {
            break;
        };

        sections.push(&buffer[body_at..end_at]);
        cursor = end_at + end.len();
    }

    sections
}
