//! Content stream decompression.

use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::error::{Error, Result};

/// Decompress one content stream.
///
/// Certificate streams carry a 2-byte zlib header before the raw deflate
/// data; the header is skipped and the remainder inflated. Trailing
/// checksum bytes after the final deflate block are ignored.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < 2 {
        return Err(Error::Decompression(
            "stream shorter than compression header".to_string(),
        ));
    }

    let mut decoder = DeflateDecoder::new(&data[2..]);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| Error::Decompression(e.to_string()))?;

    Ok(out)
}
