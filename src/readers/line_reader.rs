use std::io::BufRead;

use crate::{error::ReportError, model::raw_row::RawRow};

/// Yields one `RawRow` per input line, numbered from 1. Fields are split on
/// `,` without any quote handling and are left untrimmed. A trailing `\r` is
/// dropped so CRLF files behave like LF files. Bytes that are not valid UTF-8
/// become U+FFFD instead of failing the read.
pub struct LineRowSource<R> {
    input: R,
    buf: Vec<u8>,
    line: u64,
}

impl<R: BufRead> LineRowSource<R> {
    pub fn new(input: R) -> LineRowSource<R> {
        LineRowSource {
            input,
            buf: Vec::new(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for LineRowSource<R> {
    type Item = Result<RawRow, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.input.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(ReportError::from(e))),
        }
        self.line += 1;

        let bytes = self.buf.strip_suffix(b"\n").unwrap_or(self.buf.as_slice());
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        let text = String::from_utf8_lossy(bytes);
        Some(Ok(RawRow::from_line(self.line, &text)))
    }
}
