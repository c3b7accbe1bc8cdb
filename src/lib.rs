//! Grab-bag utility library.
//!
//! The main piece is a CSV reader/writer with strict or lenient
//! column-name resolution; alongside it sit a few small value types
//! (Roman numerals, ISO week-years) and a scoped temp-directory helper.

pub mod domain;
pub mod infrastructure;

pub use domain::csv::{CsvRow, CsvRows, HeaderSet};
pub use domain::error::{Error, Result};
pub use domain::roman::RomanNumeral;
pub use domain::week_year::WeekYear;
pub use infrastructure::csv::{detect_delimiter, CsvReader, CsvWriter};
pub use infrastructure::temp_dir;
