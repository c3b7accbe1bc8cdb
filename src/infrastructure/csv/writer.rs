// ============================================================
// CSV WRITER
// ============================================================
// Export staged rows as a CSV file with every field quoted

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

use crate::domain::csv::{CsvRow, CsvRows, HeaderSet};
use crate::domain::error::{Error, Result};

/// CSV file writer.
///
/// Rows are staged against a fixed header set, then exported with a
/// header line followed by one line per row. Every field is quoted and
/// embedded quotes are doubled.
///
/// ```no_run
/// use kitbag::{CsvWriter, HeaderSet};
///
/// let mut writer = CsvWriter::new(HeaderSet::from(&["Id", "Item"][..]));
/// let row = writer.add_row();
/// row.set_index(0, 145678).unwrap();
/// row.set("item", "This is a widget").unwrap();
/// let written = writer.export("widgets.csv").unwrap();
/// assert_eq!(written, 1); // header line not counted
/// ```
#[derive(Debug, Clone)]
pub struct CsvWriter {
    headers: Arc<HeaderSet>,
    rows: CsvRows,
}

impl CsvWriter {
    /// Default column delimiter
    pub const DEFAULT_DELIMITER: u8 = b',';

    /// Create a writer for the given headers
    pub fn new(headers: impl Into<HeaderSet>) -> Self {
        Self {
            headers: Arc::new(headers.into()),
            rows: CsvRows::new(),
        }
    }

    /// Headers this writer exports
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Append an empty row bound to the headers and return it for
    /// cell writes
    pub fn add_row(&mut self) -> &mut CsvRow {
        self.rows.push_mut(CsvRow::new(self.headers.clone()))
    }

    /// Number of staged rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Export to a file using the default comma delimiter.
    ///
    /// Returns the number of data rows written, header line excluded.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.export_with_delimiter(path, Self::DEFAULT_DELIMITER)
    }

    /// Export to a file using the given column delimiter
    pub fn export_with_delimiter(
        &self,
        path: impl AsRef<Path>,
        delimiter: u8,
    ) -> Result<usize> {
        let path = path.as_ref();
        let content = self.render(delimiter)?;
        let mut file = File::create(path)
            .map_err(|e| Error::Io(format!("failed to create {}: {}", path.display(), e)))?;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::Io(format!("failed to write {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), rows = self.rows.len(), "exported csv file");
        Ok(self.rows.len())
    }

    /// Render the export in memory using the default delimiter
    pub fn to_csv_string(&self) -> Result<String> {
        self.render(Self::DEFAULT_DELIMITER)
    }

    fn render(&self, delimiter: u8) -> Result<String> {
        let mut wtr = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(QuoteStyle::Always)
            .from_writer(Vec::new());

        wtr.write_record(self.headers.names())
            .map_err(|e| Error::Io(format!("CSV write error: {}", e)))?;

        for row in &self.rows {
            let record: Vec<&str> = self
                .headers
                .names()
                .iter()
                .map(|h| row.get(h).unwrap_or(None).unwrap_or(""))
                .collect();
            wtr.write_record(&record)
                .map_err(|e| Error::Io(format!("CSV write error: {}", e)))?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| Error::Io(format!("CSV write error: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| Error::Io(e.to_string()))
    }
}
