// ============================================================
// ROMAN NUMERAL
// ============================================================
// Value type for Roman numerals in canonical form, 1 through 4999

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::{Error, Result};

/// Canonical-form grammar: up to four thousands, then the hundreds,
/// tens and ones groups with their subtractive pairs.
static NUMERAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap()
});

/// Symbol values in descending order, subtractive pairs included
const VALUES: [(&str, i64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// A Roman numeral.
///
/// Holds both the numeric value and the canonical uppercase rendering.
/// Parsing is case-insensitive but only accepts canonical form: `IIII`
/// and `VX` are rejected.
///
/// Serializes as the bare numeric value; deserialization applies the
/// same range validation as [`RomanNumeral::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RomanNumeral {
    value: i64,
}

impl RomanNumeral {
    /// Smallest representable value
    pub const MIN: i64 = 1;

    /// Largest representable value (four leading Ms)
    pub const MAX: i64 = 4999;

    /// Create a numeral from an integer value
    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::InvalidNumeral(format!(
                "{} outside representable range {}..={}",
                value,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self { value })
    }

    /// Create a numeral from the year of a date
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        Self::new(i64::from(date.year()))
    }

    /// Numeric value of the numeral
    pub fn value(&self) -> i64 {
        self.value
    }

    /// True if the string is a well-formed Roman numeral
    pub fn is_roman_numeral(s: &str) -> bool {
        s.parse::<RomanNumeral>().is_ok()
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut remaining = self.value;
        for (symbol, value) in VALUES {
            while remaining >= value {
                f.write_str(symbol)?;
                remaining -= value;
            }
        }
        Ok(())
    }
}

impl FromStr for RomanNumeral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !NUMERAL_PATTERN.is_match(trimmed) {
            return Err(Error::InvalidNumeral(format!(
                "'{}' is not a Roman numeral",
                s
            )));
        }

        let upper = trimmed.to_ascii_uppercase();
        let mut rest = upper.as_str();
        let mut total = 0i64;
        for (symbol, value) in VALUES {
            while let Some(r) = rest.strip_prefix(symbol) {
                total += value;
                rest = r;
            }
        }
        Self::new(total)
    }
}

impl TryFrom<i64> for RomanNumeral {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RomanNumeral> for i64 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_canonical_form() {
        assert_eq!(RomanNumeral::new(1999).unwrap().to_string(), "MCMXCIX");
        assert_eq!(RomanNumeral::new(4).unwrap().to_string(), "IV");
        assert_eq!(RomanNumeral::new(4999).unwrap().to_string(), "MMMMCMXCIX");
        assert_eq!(RomanNumeral::new(1).unwrap().to_string(), "I");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let n: RomanNumeral = "mcmxcix".parse().unwrap();
        assert_eq!(n.value(), 1999);
    }

    #[test]
    fn test_rejects_non_canonical_forms() {
        assert!(!RomanNumeral::is_roman_numeral(""));
        assert!(!RomanNumeral::is_roman_numeral("IIII"));
        assert!(!RomanNumeral::is_roman_numeral("VX"));
        assert!(!RomanNumeral::is_roman_numeral("MMMMM"));
        assert!(RomanNumeral::is_roman_numeral("XIV"));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(RomanNumeral::new(0).is_err());
        assert!(RomanNumeral::new(-7).is_err());
        assert!(RomanNumeral::new(5000).is_err());
    }

    #[test]
    fn test_round_trip_full_range() {
        for value in 1..=4999 {
            let n = RomanNumeral::new(value).unwrap();
            let parsed: RomanNumeral = n.to_string().parse().unwrap();
            assert_eq!(parsed.value(), value);
        }
    }

    #[test]
    fn test_from_date_uses_year() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(RomanNumeral::from_date(d).unwrap().to_string(), "MMXXIV");
    }

    #[test]
    fn test_serde_round_trips_as_bare_number() {
        let n = RomanNumeral::new(1999).unwrap();
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "1999");

        let back: RomanNumeral = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn test_serde_rejects_out_of_range_values() {
        assert!(serde_json::from_str::<RomanNumeral>("0").is_err());
        assert!(serde_json::from_str::<RomanNumeral>("5000").is_err());
    }

    #[test]
    fn test_ordering_by_value() {
        let a = RomanNumeral::new(9).unwrap();
        let b = RomanNumeral::new(11).unwrap();
        assert!(a < b);
    }
}
