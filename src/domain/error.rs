use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    Parse(String),
    ColumnNotFound(String),
    DuplicateColumn(String),
    RowOutOfRange(String),
    InvalidNumeral(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::ColumnNotFound(msg) => write!(f, "Column not found: {}", msg),
            Error::DuplicateColumn(msg) => write!(f, "Duplicate column: {}", msg),
            Error::RowOutOfRange(msg) => write!(f, "Row out of range: {}", msg),
            Error::InvalidNumeral(msg) => write!(f, "Invalid numeral: {}", msg),
            Error::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
