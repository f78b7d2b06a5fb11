//! Rendering module for serializing extracted records.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{to_cp1251, to_text};
