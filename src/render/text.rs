//! Plain text rendering of the extracted record.

use encoding_rs::WINDOWS_1251;

use crate::model::Certificate;

/// Render the record as newline-separated fields in the fixed output
/// order: last name, first name, middle name, birthday, sex, passport,
/// last vaccination date, last vaccine name.
///
/// Missing fields render as empty lines.
pub fn to_text(record: &Certificate) -> String {
    let mut output = String::new();

    for field in record.fields() {
        if let Some(value) = field {
            output.push_str(value);
        }
        output.push('\n');
    }

    output
}

/// Render the record as windows-1251 encoded bytes.
///
/// Characters outside the encoding are replaced by the encoder's
/// numeric character reference substitution.
pub fn to_cp1251(record: &Certificate) -> Vec<u8> {
    let text = to_text(record);
    let (encoded, _, _) = WINDOWS_1251.encode(&text);
    encoded.into_owned()
}
