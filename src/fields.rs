//! Anchor-relative field extraction.
//!
//! The certificate template prints fixed label lines; every field is
//! found at a known offset from one of them. Each rule scans the decoded
//! line list independently, so they can run (and be tested) in any
//! order.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::Certificate;
use crate::parser::ErrorMode;

/// Anchor label preceding the name, birthday, and sex lines.
pub const PERSONAL_DATA: &str = "Персональные данные";

/// Anchor label preceding the passport line.
pub const IDENTITY_DOCUMENT: &str = "Документ удостоверяющий личность";

/// Anchor labels opening a vaccination section.
pub const FIRST_VACCINATION: &str = "Первая вакцинация";
pub const SECOND_VACCINATION: &str = "Вторая вакцинация";

/// Anchor label closing the vaccination section.
pub const VACCINATION_DATE: &str = "Дата введения вакцины:";

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Apply all extraction rules to the decoded line list.
///
/// In strict mode the first missing anchor fails the parse; in lenient
/// mode it is logged and the affected fields stay absent.
pub fn extract(lines: &[String], mode: ErrorMode) -> Result<Certificate> {
    let mut record = Certificate::new();

    let rules: [fn(&[String], &mut Certificate) -> Result<()>; 3] =
        [personal_data, document_data, vaccine_data];

    for rule in rules {
        if let Err(e) = rule(lines, &mut record) {
            match mode {
                ErrorMode::Strict => return Err(e),
                ErrorMode::Lenient => log::warn!("{}", e),
            }
        }
    }

    Ok(record)
}

/// Extract name, birthday, and sex from the lines following the
/// personal-data anchor.
///
/// Lines past the end of the list leave their fields absent.
pub fn personal_data(lines: &[String], record: &mut Certificate) -> Result<()> {
    let at = position(lines, PERSONAL_DATA)?;

    if let Some(full_name) = lines.get(at + 1) {
        split_name(full_name, record);
    }
    record.birthday = lines.get(at + 2).cloned();
    record.sex = lines.get(at + 3).cloned();

    Ok(())
}

/// Extract the passport number: the first line at or after the identity
/// document anchor containing a digit.
pub fn document_data(lines: &[String], record: &mut Certificate) -> Result<()> {
    let at = position(lines, IDENTITY_DOCUMENT)?;

    record.passport = lines[at..]
        .iter()
        .find(|line| line.chars().any(char::is_numeric))
        .cloned();

    Ok(())
}

/// Extract the last vaccination date and vaccine name.
///
/// The section spans from the later of the two vaccination anchors to
/// the last date-administered anchor. The first line in between that
/// parses as `dd.MM.yyyy` is the date; every line skipped on the way is
/// part of the vaccine name.
pub fn vaccine_data(lines: &[String], record: &mut Certificate) -> Result<()> {
    let start = last_position(lines, FIRST_VACCINATION)
        .max(last_position(lines, SECOND_VACCINATION))
        .ok_or_else(|| {
            Error::AnchorNotFound(format!("{} / {}", FIRST_VACCINATION, SECOND_VACCINATION))
        })?;
    let end = last_position(lines, VACCINATION_DATE)
        .ok_or_else(|| Error::AnchorNotFound(VACCINATION_DATE.to_string()))?;

    let mut stop = end + 1;
    for index in (start + 1)..=end {
        let line = &lines[index];
        if is_vaccination_date(line) {
            record.last_vaccination_date = Some(line.clone());
            stop = index;
            break;
        }
    }

    if start + 1 < stop {
        let name = lines[start + 1..stop].join(" ");
        if !name.is_empty() {
            record.last_vaccine_name = Some(name);
        }
    }

    Ok(())
}

/// Split a "Last First [Middle...]" line into its name fields.
fn split_name(full_name: &str, record: &mut Certificate) {
    let mut parts = full_name.split_whitespace();

    record.last_name = parts.next().map(str::to_string);
    record.first_name = parts.next().map(str::to_string);

    let middle = parts.collect::<Vec<_>>().join(" ");
    if !middle.is_empty() {
        record.middle_name = Some(middle);
    }
}

fn is_vaccination_date(line: &str) -> bool {
    NaiveDate::parse_from_str(line, DATE_FORMAT).is_ok()
}

fn position(lines: &[String], anchor: &str) -> Result<usize> {
    lines
        .iter()
        .position(|line| line == anchor)
        .ok_or_else(|| Error::AnchorNotFound(anchor.to_string()))
}

fn last_position(lines: &[String], anchor: &str) -> Option<usize> {
    lines.iter().rposition(|line| line == anchor)
}
