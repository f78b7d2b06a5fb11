//! The content extraction pipeline.
//!
//! Raw document bytes are split into content streams, each stream is
//! decompressed, the remap table is read from the last stream, and every
//! text-show block is decoded into the ordered line list.

use super::inflate;
use super::remap::RemapTable;
use super::scan::{self, STREAM_BEGIN, STREAM_END, TEXT_BEGIN, TEXT_END};
use super::text::decode_blocks;

/// Extract the decoded text lines from raw document bytes.
///
/// A stream that fails to decompress is treated as empty — image and
/// font streams are expected in the document and carry no text. A
/// document with no content streams yields no lines.
pub fn extract_text_lines(data: &[u8]) -> Vec<String> {
    let sections = scan::extract_sections(data, STREAM_BEGIN, STREAM_END);

    let streams: Vec<Vec<u8>> = sections
        .iter()
        .enumerate()
        .map(|(index, section)| match inflate::decompress(section) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("skipping unreadable content stream {}: {}", index, e);
                Vec::new()
            }
        })
        .collect();

    // The template stores the remap table in the last stream.
    let Some(table_stream) = streams.last() else {
        return Vec::new();
    };
    let table = RemapTable::parse(table_stream);

    let blocks: Vec<&[u8]> = streams
        .iter()
        .flat_map(|stream| scan::extract_sections(stream, TEXT_BEGIN, TEXT_END))
        .collect();

    decode_blocks(&blocks, &table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn zlib_compress(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn wrap_stream(doc: &mut Vec<u8>, content: &[u8]) {
        doc.extend_from_slice(b"stream\n");
        doc.extend_from_slice(&zlib_compress(content));
        doc.extend_from_slice(b"\nendstream");
    }

    /// Encode text as big-endian identity code units inside a Tj block.
    fn text_block(text: &str) -> Vec<u8> {
        let mut block = b"\n(".to_vec();
        for ch in text.chars() {
            let code = ch as u32 as u16;
            block.extend_from_slice(&code.to_be_bytes());
        }
        block.extend_from_slice(b")Tj\n");
        block
    }

    #[test]
    fn test_extract_lines_from_synthetic_document() {
        let mut content = Vec::new();
        content.extend_from_slice(&text_block("first line"));
        content.extend_from_slice(&text_block("second line"));

        let mut doc = Vec::new();
        wrap_stream(&mut doc, &content);
        wrap_stream(&mut doc, b"no table entries");

        let lines = extract_text_lines(&doc);
        assert_eq!(lines, vec!["first line".to_string(), "second line".to_string()]);
    }

    #[test]
    fn test_unreadable_stream_is_tolerated() {
        let content = text_block("survivor");

        let mut doc = Vec::new();
        doc.extend_from_slice(b"stream\n\x00\x01\xff\xff\xff\xff\nendstream");
        wrap_stream(&mut doc, &content);

        let lines = extract_text_lines(&doc);
        assert_eq!(lines, vec!["survivor".to_string()]);
    }

    #[test]
    fn test_no_streams_yields_no_lines() {
        assert!(extract_text_lines(b"just some bytes").is_empty());
        assert!(extract_text_lines(b"").is_empty());
    }

    #[test]
    fn test_remap_table_read_from_last_stream() {
        // Code 0x008a renders as U+0412 only if the table in the last
        // stream is applied.
        let mut content = b"\n(".to_vec();
        content.extend_from_slice(&[0x00, 0x8a]);
        content.extend_from_slice(b")Tj\n");

        let mut doc = Vec::new();
        wrap_stream(&mut doc, &content);
        wrap_stream(&mut doc, b"<0000><008a><0412>");

        let lines = extract_text_lines(&doc);
        assert_eq!(lines, vec!["\u{0412}".to_string()]);
    }
}
