// ============================================================
// CSV ROW COLLECTION
// ============================================================
// Ordered rows produced by an import or staged for an export

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::CsvRow;
use crate::domain::error::{Error, Result};

/// Ordered collection of [`CsvRow`]s
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsvRows {
    rows: Vec<CsvRow>,
}

impl CsvRows {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row
    pub fn push(&mut self, row: CsvRow) {
        self.rows.push(row);
    }

    /// Append a row and return it for cell writes
    pub fn push_mut(&mut self, row: CsvRow) -> &mut CsvRow {
        let index = self.rows.len();
        self.rows.push(row);
        &mut self.rows[index]
    }

    /// Get a row by 0-based index, erroring when the index falls
    /// outside the valid range of rows
    pub fn get_row(&self, index: usize) -> Result<&CsvRow> {
        self.rows.get(index).ok_or_else(|| {
            Error::RowOutOfRange(format!(
                "index {} outside of valid range of rows ({})",
                index,
                self.rows.len()
            ))
        })
    }
}

impl Deref for CsvRows {
    type Target = [CsvRow];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl IntoIterator for CsvRows {
    type Item = CsvRow;
    type IntoIter = std::vec::IntoIter<CsvRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CsvRows {
    type Item = &'a CsvRow;
    type IntoIter = std::slice::Iter<'a, CsvRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<CsvRow> for CsvRows {
    fn from_iter<I: IntoIterator<Item = CsvRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
