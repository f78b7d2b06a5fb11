//! Character remap table.
//!
//! The certificate template embeds a custom glyph-code table in its last
//! content stream instead of a standard CMap. Entries are triples of
//! 4-digit hex groups `<from><code><char>`; only the second and third
//! groups are used.

use std::collections::HashMap;

use regex::bytes::Regex;

/// Mapping from 16-bit glyph codes to output characters.
///
/// Codes absent from the table pass through unchanged during decoding.
#[derive(Debug, Clone, Default)]
pub struct RemapTable {
    entries: HashMap<u16, char>,
}

impl RemapTable {
    /// Parse a remap table from raw stream bytes.
    ///
    /// A stream with no recognizable entries yields an empty table: every
    /// lookup misses and decoding falls back to the identity mapping.
    /// Duplicate input codes keep the last occurrence.
    pub fn parse(stream: &[u8]) -> Self {
        let pattern = Regex::new(r"<([0-9a-fA-F]{4})><([0-9a-fA-F]{4})><([0-9a-fA-F]{4})>").unwrap();

        let mut entries = HashMap::new();
        for caps in pattern.captures_iter(stream) {
            let code = parse_hex_group(&caps[2]);
            let target = parse_hex_group(&caps[3]);

            if let (Some(code), Some(target)) = (code, target) {
                if let Some(ch) = char::from_u32(u32::from(target)) {
                    entries.insert(code, ch);
                }
            }
        }

        Self { entries }
    }

    /// Look up a glyph code. `None` means "no remapping".
    pub fn get(&self, code: u16) -> Option<char> {
        self.entries.get(&code).copied()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_hex_group(group: &[u8]) -> Option<u16> {
    let text = std::str::from_utf8(group).ok()?;
    u16::from_str_radix(text, 16).ok()
}
