pub mod csv;
pub mod error;
pub mod roman;
pub mod week_year;
