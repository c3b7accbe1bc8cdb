// ============================================================
// HEADER SET
// ============================================================
// Ordered column headers plus the name-resolution policy

use serde::{Deserialize, Serialize};

use crate::domain::error::{Error, Result};

/// Ordered CSV column headers with strict or lenient name resolution.
///
/// Lenient (the default) resolves column names case-insensitively;
/// strict requires an exact, case-sensitive match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderSet {
    names: Vec<String>,
    strict: bool,
}

impl HeaderSet {
    /// Create a lenient header set from the given column names
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            strict: false,
        }
    }

    /// Set whether name resolution is case-sensitive
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether name resolution is case-sensitive
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Column names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if there are no columns
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a lookup name to the canonical header name.
    ///
    /// Under lenient resolution the first header matching
    /// case-insensitively wins; under strict resolution only an exact
    /// match is accepted.
    pub fn resolve(&self, name: &str) -> Result<&str> {
        if self.strict {
            self.names
                .iter()
                .find(|h| h.as_str() == name)
                .map(String::as_str)
                .ok_or_else(|| {
                    Error::ColumnNotFound(format!(
                        "'{}'; please verify the name casing",
                        name
                    ))
                })
        } else {
            self.names
                .iter()
                .find(|h| h.eq_ignore_ascii_case(name))
                .map(String::as_str)
                .ok_or_else(|| Error::ColumnNotFound(format!("'{}'", name)))
        }
    }

    /// Resolve a 0-based column index to the canonical header name.
    ///
    /// A blank header at the index is an error, as is an index outside
    /// the header range.
    pub fn resolve_index(&self, index: usize) -> Result<&str> {
        let name = self
            .names
            .get(index)
            .ok_or_else(|| {
                Error::ColumnNotFound(format!("index {} out of range", index))
            })?;
        if name.is_empty() {
            return Err(Error::ColumnNotFound(format!(
                "name is blank at index {}",
                index
            )));
        }
        Ok(name)
    }
}

impl From<Vec<String>> for HeaderSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<&[&str]> for HeaderSet {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().map(|s| s.to_string()).collect())
    }
}
