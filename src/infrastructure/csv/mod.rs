// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// File import/export and delimiter detection

mod delimiter;
mod reader;
mod writer;

pub use delimiter::detect_delimiter;
pub use reader::CsvReader;
pub use writer::CsvWriter;
