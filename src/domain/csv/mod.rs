// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Row model and column-name resolution
// No I/O; reading and writing live in the infrastructure layer

mod header_set;
mod row;
mod rows;

pub use header_set::HeaderSet;
pub use row::CsvRow;
pub use rows::CsvRows;
