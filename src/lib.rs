//! # vaccert
//!
//! Extracts structured personal and vaccination data from Russian
//! COVID-19 vaccination certificate PDFs.
//!
//! The certificate template is fixed, so no general PDF machinery is
//! needed: compressed content streams are located by marker search,
//! inflated, decoded through the embedded character remap table, and the
//! resulting text lines are scanned for known anchor labels.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vaccert::{parse_file, render};
//!
//! fn main() -> vaccert::Result<()> {
//!     let record = parse_file("certificate.pdf")?;
//!     println!("{}", render::to_text(&record));
//!     Ok(())
//! }
//! ```

pub mod detect;
pub mod error;
pub mod fields;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format, is_pdf_bytes, PdfFormat};
pub use error::{Error, Result};
pub use model::Certificate;
pub use parser::{ErrorMode, ParseOptions, RemapTable};
pub use render::JsonFormat;

use std::path::Path;

use rayon::prelude::*;

/// Parse a certificate file and return the extracted record.
///
/// # Example
///
/// ```no_run
/// use vaccert::parse_file;
///
/// let record = parse_file("certificate.pdf").unwrap();
/// println!("{:?}", record.last_name);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Certificate> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a certificate file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Certificate> {
    let data = std::fs::read(path)?;
    parse_bytes_with_options(&data, options)
}

/// Parse a certificate from raw bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Certificate> {
    parse_bytes_with_options(data, ParseOptions::default())
}

/// Parse a certificate from raw bytes with custom options.
///
/// The scan is best-effort: input without a `%PDF-` header is still
/// scanned, with a warning.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Certificate> {
    if !detect::is_pdf_bytes(data) {
        log::warn!("input does not carry a %PDF header; scanning anyway");
    }

    let lines = parser::extract_text_lines(data);
    fields::extract(&lines, options.error_mode)
}

/// Extract the decoded text lines without field extraction.
///
/// Useful for diagnosing documents whose layout deviates from the
/// expected template.
pub fn extract_lines(data: &[u8]) -> Vec<String> {
    parser::extract_text_lines(data)
}

/// Parse many certificate files in parallel.
///
/// Every document is an independent pipeline, so batches parallelize
/// with no shared state. Results preserve input order.
pub fn parse_batch<P: AsRef<Path> + Sync>(
    paths: &[P],
    options: &ParseOptions,
) -> Vec<Result<Certificate>> {
    paths
        .par_iter()
        .map(|path| parse_file_with_options(path, options.clone()))
        .collect()
}
