use thiserror::Error;

/// Conditions that abort a run before any report is produced.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV file is empty.")]
    EmptyInput,

    #[error("CSV header is invalid.")]
    InvalidHeader,

    #[error("Error reading the file: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single data row was skipped. The `Display` output is the diagnostic
/// line written to the error channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Invalid row at line {line}: Incorrect number of fields.")]
    FieldCount { line: u64 },

    #[error("Invalid row at line {line}: Year ({value}) is not in the 20th or 21st century.")]
    Year { line: u64, value: String },

    #[error("Invalid row at line {line}: One or more ratings are not between 1 and 100.")]
    Rating { line: u64 },
}

impl Rejection {
    pub fn line(&self) -> u64 {
        match self {
            Rejection::FieldCount { line }
            | Rejection::Year { line, .. }
            | Rejection::Rating { line } => *line,
        }
    }
}
