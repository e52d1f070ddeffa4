/// The tokens of one input line, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source, used for diagnostics only.
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> RawRow {
        RawRow { line, fields }
    }

    /// Splits `text` on `,` with no quote handling. Trailing empty fields are
    /// dropped, but a line without any `,` is always one field, even when
    /// blank.
    pub fn from_line(line: u64, text: &str) -> RawRow {
        if !text.contains(',') {
            return RawRow::new(line, vec![text.to_string()]);
        }

        let mut fields: Vec<String> = text.split(',').map(|s| s.to_string()).collect();
        while fields.last().is_some_and(String::is_empty) {
            fields.pop();
        }

        RawRow { line, fields }
    }
}
