use crate::error::ReportError;

pub const EXPECTED_HEADER: [&str; 6] = ["Title", "Year", "Genre", "Rating1", "Rating2", "Rating3"];

/// Column names must match in order, ignoring case and surrounding whitespace.
pub fn validate_header(fields: &[String]) -> Result<(), ReportError> {
    if fields.len() != EXPECTED_HEADER.len() {
        return Err(ReportError::InvalidHeader);
    }

    let matches = fields
        .iter()
        .zip(EXPECTED_HEADER)
        .all(|(field, expected)| field.trim().eq_ignore_ascii_case(expected));

    if matches {
        Ok(())
    } else {
        Err(ReportError::InvalidHeader)
    }
}
