use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
};

pub mod config;
pub mod error;
pub mod model;
pub mod ranking;
pub mod readers;
pub mod renderers;
pub mod validators;

use error::ReportError;
use model::raw_row::RawRow;
use readers::line_reader::LineRowSource;
use renderers::report_renderer::render_report;
use validators::{header_validator::validate_header, row_validator::validate_row};

/// Counts from one run, for callers that want more than the printed report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

pub fn run(path: &Path) -> Result<Summary, ReportError> {
    log::debug!("Reading movies from {}", path.display());
    let file = File::open(path)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    process(BufReader::new(file), &mut stdout.lock(), &mut stderr.lock())
}

pub fn process<R, W, E>(
    input: R,
    report: &mut W,
    diagnostics: &mut E,
) -> Result<Summary, ReportError>
where
    R: Read,
    W: Write,
    E: Write,
{
    process_rows(LineRowSource::new(BufReader::new(input)), report, diagnostics)
}

/// Validates the header and every data row, then ranks and renders. Nothing
/// is written to `report` if a fatal condition occurs at any point.
pub fn process_rows<I, W, E>(
    rows: I,
    report: &mut W,
    diagnostics: &mut E,
) -> Result<Summary, ReportError>
where
    I: IntoIterator<Item = Result<RawRow, ReportError>>,
    W: Write,
    E: Write,
{
    let mut rows = rows.into_iter();

    let header = rows.next().ok_or(ReportError::EmptyInput)??;
    validate_header(&header.fields)?;

    let mut movies = vec![];
    let mut summary = Summary::default();
    for row in rows {
        match validate_row(&row?) {
            Ok(movie) => {
                log::trace!("Accepted {:?}", movie);
                movies.push(movie);
                summary.accepted += 1;
            }
            Err(rejection) => {
                log::debug!("Skipping row at line {}: {:?}", rejection.line(), rejection);
                writeln!(diagnostics, "{}", rejection)?;
                summary.rejected += 1;
            }
        }
    }

    log::debug!(
        "Validated {} rows: {} accepted, {} rejected",
        summary.accepted + summary.rejected,
        summary.accepted,
        summary.rejected
    );

    let ranked = ranking::rank(movies);
    render_report(&ranked, report)?;

    Ok(summary)
}
