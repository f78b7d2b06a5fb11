//! The extracted certificate record.

use serde::{Deserialize, Serialize};

/// Data extracted from one vaccination certificate.
///
/// Every field is optional: absence means the value was not present in
/// the document, not that it was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Last name (фамилия)
    pub last_name: Option<String>,

    /// First name (имя)
    pub first_name: Option<String>,

    /// Middle name / patronymic (отчество)
    pub middle_name: Option<String>,

    /// Date of birth, as printed in the document
    pub birthday: Option<String>,

    /// Sex, as printed in the document
    pub sex: Option<String>,

    /// Identity document (passport) number
    pub passport: Option<String>,

    /// Date of the last vaccination (dd.MM.yyyy)
    pub last_vaccination_date: Option<String>,

    /// Name of the last administered vaccine
    pub last_vaccine_name: Option<String>,
}

impl Certificate {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fields in their fixed output order.
    pub fn fields(&self) -> [&Option<String>; 8] {
        [
            &self.last_name,
            &self.first_name,
            &self.middle_name,
            &self.birthday,
            &self.sex,
            &self.passport,
            &self.last_vaccination_date,
            &self.last_vaccine_name,
        ]
    }

    /// Check if no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|field| field.is_none())
    }
}
