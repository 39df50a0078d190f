use crate::parser::parse_line;
use crate::types::FilmRecord;
use crate::years::YearFilter;
use std::io::BufRead;
use tracing::debug;

/// Lazy, forward-only pass over a catalog source.
///
/// Lines are decoded leniently (bytes that are not valid UTF-8 are
/// replaced, never fatal), parse failures are skipped, and records
/// outside the year filter are dropped. Nothing is buffered beyond
/// the current line.
pub struct CatalogScanner<R: BufRead> {
    reader: R,
    filter: YearFilter,
    line_no: u64,
}

impl<R: BufRead> CatalogScanner<R> {
    pub fn new(reader: R, filter: YearFilter) -> Self {
        Self { reader, filter, line_no: 0 }
    }
}

impl<R: BufRead> Iterator for CatalogScanner<R> {
    type Item = FilmRecord;

    fn next(&mut self) -> Option<FilmRecord> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    // Mid-stream read errors end the scan; opening the
                    // source is the caller's fatal path.
                    debug!(error = %e, "catalog read error, ending scan");
                    return None;
                }
            }
            self.line_no += 1;
            let line = String::from_utf8_lossy(&buf);
            match parse_line(&line) {
                Ok(record) if self.filter.matches(record.year) => return Some(record),
                Ok(_) => continue,
                Err(e) => {
                    debug!(line = self.line_no, error = %e, "skipping unparseable line");
                    continue;
                }
            }
        }
    }
}
