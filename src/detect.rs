//! PDF format detection.
//!
//! Detection is advisory here: the certificate scan is a best-effort
//! structural pass over the raw bytes, so a missing `%PDF-` header is
//! logged rather than rejected.

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.4", "1.7")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Detect PDF format from the leading bytes of a document.
///
/// Returns `None` when the data does not start with a `%PDF-x.y` header.
pub fn detect_format(data: &[u8]) -> Option<PdfFormat> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN {
        return None;
    }

    if !data.starts_with(PDF_MAGIC) {
        return None;
    }

    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return None;
    }

    Some(PdfFormat { version })
}

/// Check if a version string looks like "1.0" through "2.0".
fn is_valid_version(version: &str) -> bool {
    let chars: Vec<char> = version.chars().collect();
    chars.len() == 3 && chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}

/// Check if bytes carry a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format(data).is_some()
}
