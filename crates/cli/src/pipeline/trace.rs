//! JSON Lines trace reader.
//!
//! One `TraceRecord` per line. Blank lines and `#` comments are skipped;
//! errors carry the 1-based line number.

use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::Path;

use contracts::{ContractError, TraceRecord};

/// Streaming reader over a replay trace
pub struct TraceReader<R> {
    lines: Split<R>,
    line_no: usize,
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file
    pub fn open(path: &Path) -> Result<Self, ContractError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, ContractError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            let line = match std::str::from_utf8(&bytes) {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(ContractError::trace_parse(
                        self.line_no,
                        e.to_string(),
                    )))
                }
            };

            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            return Some(
                serde_json::from_str(content)
                    .map_err(|e| ContractError::trace_parse(self.line_no, e.to_string())),
            );
        }
    }
}
