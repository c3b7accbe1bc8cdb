// ============================================================
// CSV ROW
// ============================================================
// A single record: cells addressed by column name or index

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::HeaderSet;
use crate::domain::error::{Error, Result};

/// A single row of a CSV file.
///
/// Cells are stored against the canonical header name. A cell that was
/// present but empty in the source holds `None`; a cell that was never
/// written also reads as `None`.
///
/// Serialization inlines the header set per row; deserialized rows do
/// not share one `HeaderSet` allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvRow {
    headers: Arc<HeaderSet>,
    cells: HashMap<String, Option<String>>,
}

impl CsvRow {
    /// Create an empty row bound to the given headers
    pub fn new(headers: Arc<HeaderSet>) -> Self {
        Self {
            headers,
            cells: HashMap::new(),
        }
    }

    /// Headers this row is bound to
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Get a cell by column name.
    ///
    /// Name resolution follows the header set's strict/lenient policy.
    /// Returns `Ok(None)` for an empty or never-written cell.
    pub fn get(&self, name: &str) -> Result<Option<&str>> {
        let canonical = self.headers.resolve(name)?;
        Ok(self
            .cells
            .get(canonical)
            .and_then(|v| v.as_deref()))
    }

    /// Get a cell by 0-based column index
    pub fn get_index(&self, index: usize) -> Result<Option<&str>> {
        let canonical = self.headers.resolve_index(index)?;
        Ok(self
            .cells
            .get(canonical)
            .and_then(|v| v.as_deref()))
    }

    /// Write a cell by column name.
    ///
    /// Writing the same cell twice is an error.
    pub fn set(&mut self, name: &str, value: impl fmt::Display) -> Result<()> {
        let canonical = self.headers.resolve(name)?.to_string();
        self.insert_checked(canonical, Some(value.to_string()))
    }

    /// Write a cell by 0-based column index
    pub fn set_index(&mut self, index: usize, value: impl fmt::Display) -> Result<()> {
        let canonical = self.headers.resolve_index(index)?.to_string();
        self.insert_checked(canonical, Some(value.to_string()))
    }

    /// Non-empty cells as (canonical name, value) pairs, in header order
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.names().iter().filter_map(|h| {
            self.cells
                .get(h.as_str())
                .and_then(|v| v.as_deref())
                .map(|v| (h.as_str(), v))
        })
    }

    /// True if no cell holds a value
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.is_none())
    }

    fn insert_checked(&mut self, canonical: String, value: Option<String>) -> Result<()> {
        if self.cells.contains_key(&canonical) {
            return Err(Error::DuplicateColumn(format!(
                "'{}' already written to this row",
                canonical
            )));
        }
        self.cells.insert(canonical, value);
        Ok(())
    }

    /// Import-side cell insertion: first write wins, later writes under
    /// a duplicate header are ignored.
    pub(crate) fn set_raw(&mut self, canonical: &str, value: Option<String>) {
        self.cells
            .entry(canonical.to_string())
            .or_insert(value);
    }
}
