//! PDF content parsing module.

mod content;
mod inflate;
mod options;
mod remap;
mod scan;
mod text;

pub use content::extract_text_lines;
pub use inflate::decompress;
pub use options::{ErrorMode, ParseOptions};
pub use remap::RemapTable;
pub use scan::{extract_sections, find_sequence};
pub use text::decode_blocks;
