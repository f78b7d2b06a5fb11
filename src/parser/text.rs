//! Text block decoding.

use super::remap::RemapTable;

/// Decode text-show blocks into the ordered line list.
///
/// Block bytes are big-endian 16-bit code units (an odd trailing byte is
/// dropped). Each code unit is remapped through the table, or kept as a
/// raw Unicode scalar on a miss. Every block contributes one logical
/// line; the concatenation is then split on line breaks, trimmed, and
/// stripped of blank segments, preserving order.
pub fn decode_blocks(blocks: &[&[u8]], table: &RemapTable) -> Vec<String> {
    let mut text = String::new();

    for block in blocks {
        for unit in code_units(block) {
            let ch = table
                .get(unit)
                .or_else(|| char::from_u32(u32::from(unit)))
                .unwrap_or('\u{FFFD}');
            text.push(ch);
        }
        text.push('\n');
    }

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Group block bytes into big-endian u16 code units.
fn code_units(block: &[u8]) -> impl Iterator<Item = u16> + '_ {
    block
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_unmapped_codes_pass_through() {
        // "AB" as big-endian code units, no table: raw scalars survive.
        let block: &[u8] = &[0x00, 0x41, 0x00, 0x42];
        let lines = decode_blocks(&[block], &RemapTable::default());
        assert_eq!(lines, vec!["AB".to_string()]);
    }

    #[test]
    fn test_decode_applies_remap() {
        let table = RemapTable::parse(b"<0000><008a><0412>");
        let block: &[u8] = &[0x00, 0x8a];
        let lines = decode_blocks(&[block], &table);
        assert_eq!(lines, vec!["\u{0412}".to_string()]);
    }

    #[test]
    fn test_decode_one_line_per_block() {
        let a: &[u8] = &[0x00, 0x41];
        let b: &[u8] = &[0x00, 0x42];
        let lines = decode_blocks(&[a, b], &RemapTable::default());
        assert_eq!(lines, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_decode_drops_odd_trailing_byte() {
        let block: &[u8] = &[0x00, 0x41, 0x00];
        let lines = decode_blocks(&[block], &RemapTable::default());
        assert_eq!(lines, vec!["A".to_string()]);
    }

    #[test]
    fn test_decode_trims_and_drops_blank_segments() {
        // "  A  " and an all-whitespace block.
        let padded: &[u8] = &[0x00, 0x20, 0x00, 0x41, 0x00, 0x20];
        let blank: &[u8] = &[0x00, 0x20, 0x00, 0x20];
        let lines = decode_blocks(&[padded, blank], &RemapTable::default());
        assert_eq!(lines, vec!["A".to_string()]);
    }

    #[test]
    fn test_decode_surrogate_code_unit_is_replaced() {
        let block: &[u8] = &[0xd8, 0x00];
        let lines = decode_blocks(&[block], &RemapTable::default());
        assert_eq!(lines, vec!["\u{FFFD}".to_string()]);
    }

    #[test]
    fn test_decode_empty_input() {
        let lines = decode_blocks(&[], &RemapTable::default());
        assert!(lines.is_empty());
    }
}
