// ============================================================
// CSV READER
// ============================================================
// Import CSV files or strings into the domain row model

use std::fs;
use std::path::Path;
use std::sync::Arc;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::domain::csv::{CsvRow, CsvRows, HeaderSet};
use crate::domain::error::{Error, Result};

use super::delimiter::detect_delimiter;

/// Number of bytes sampled for delimiter detection
const DETECT_SAMPLE_BYTES: usize = 4096;

/// CSV file reader.
///
/// Headers come from the first record of the source unless supplied up
/// front, in which case every record is data. Column-name lookups on
/// the resulting rows are case-insensitive unless `strict` is set.
///
/// ```no_run
/// use kitbag::CsvReader;
///
/// let rows = CsvReader::new().import("applicants.csv").unwrap();
/// let a = rows.get_row(0).unwrap().get("ApplicantNo").unwrap();
/// let b = rows.get_row(0).unwrap().get("APPLICANTNO").unwrap();
/// assert_eq!(a, b); // lenient by default
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    headers: Option<Vec<String>>,
    strict: bool,
}

impl CsvReader {
    /// Default column delimiter
    pub const DEFAULT_DELIMITER: u8 = b',';

    /// Create a reader that takes headers from the first record,
    /// with lenient column-name resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the column headers; the first record of the source is
    /// then treated as data
    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Set whether column-name resolution is case-sensitive
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Import a file using the default comma delimiter
    pub fn import(&self, path: impl AsRef<Path>) -> Result<CsvRows> {
        self.import_with_delimiter(path, Self::DEFAULT_DELIMITER)
    }

    /// Import a file using the given column delimiter
    pub fn import_with_delimiter(
        &self,
        path: impl AsRef<Path>,
        delimiter: u8,
    ) -> Result<CsvRows> {
        let path = path.as_ref();
        let content = read_with_encoding_fallback(path)?;
        let rows = self.import_str_with_delimiter(&content, delimiter)?;
        debug!(path = %path.display(), rows = rows.len(), "imported csv file");
        Ok(rows)
    }

    /// Import a file, detecting the delimiter from a leading sample
    pub fn import_auto(&self, path: impl AsRef<Path>) -> Result<CsvRows> {
        let path = path.as_ref();
        let content = read_with_encoding_fallback(path)?;
        let mut sample_end = content.len().min(DETECT_SAMPLE_BYTES);
        while !content.is_char_boundary(sample_end) {
            sample_end -= 1;
        }
        let delimiter = detect_delimiter(&content[..sample_end]);
        debug!(
            path = %path.display(),
            delimiter = %(delimiter as char),
            "detected csv delimiter"
        );
        self.import_str_with_delimiter(&content, delimiter)
    }

    /// Import from an in-memory string using the default delimiter
    pub fn import_str(&self, content: &str) -> Result<CsvRows> {
        self.import_str_with_delimiter(content, Self::DEFAULT_DELIMITER)
    }

    /// Import from an in-memory string using the given delimiter
    pub fn import_str_with_delimiter(&self, content: &str, delimiter: u8) -> Result<CsvRows> {
        let supplied = self.headers.is_some();
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true) // records may be shorter or longer than the headers
            .has_headers(!supplied)
            .from_reader(content.as_bytes());

        let header_names: Vec<String> = match &self.headers {
            Some(names) => names.clone(),
            None => reader
                .headers()
                .map_err(|e| Error::Parse(format!("failed to read CSV headers: {}", e)))?
                .iter()
                .map(str::to_string)
                .collect(),
        };
        let headers = Arc::new(HeaderSet::new(header_names).with_strict(self.strict));

        let mut rows = CsvRows::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                Error::Parse(format!("failed to parse CSV record {}: {}", index + 1, e))
            })?;

            let mut row = CsvRow::new(headers.clone());
            for (i, name) in headers.names().iter().enumerate() {
                // Records shorter than the headers pad with empty cells;
                // cells beyond the headers are dropped.
                let value = record
                    .get(i)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                row.set_raw(name, value);
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

/// Read a file as UTF-8, falling back to lossy decoding when the
/// content is not valid UTF-8.
fn read_with_encoding_fallback(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| Error::Io(format!("failed to read {}: {}", path.display(), e)))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}
