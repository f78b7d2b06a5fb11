//! Error types for the vaccert library.

use std::io;
use thiserror::Error;

/// Result type alias for vaccert operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing a certificate.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A content stream failed to decompress.
    ///
    /// The pipeline recovers from this per stream (the stream is treated
    /// as empty); it is only surfaced by the direct decompression API.
    #[error("Stream decompression error: {0}")]
    Decompression(String),

    /// A required anchor line is absent from the decoded text.
    #[error("Required anchor not found: {0}")]
    AnchorNotFound(String),

    /// Error serializing the extracted record.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::AnchorNotFound("Персональные данные".to_string());
        assert_eq!(
            err.to_string(),
            "Required anchor not found: Персональные данные"
        );

        let err = Error::Decompression("corrupt deflate stream".to_string());
        assert!(err.to_string().starts_with("Stream decompression error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
