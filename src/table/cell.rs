//! Cell values and input typing.
//!
//! A raw CSV field becomes one of:
//! - `Missing` for missing tokens (see [`is_missing_token`]);
//! - `Int` when it parses as a signed 64-bit integer;
//! - `Float` when it parses as a finite float;
//! - `Text` otherwise (the raw field, untouched).

use std::fmt;

use crate::format::numbers::format_float_shortest;
use crate::normalize::trim::ascii_trim;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Type a raw field.
    pub fn parse(raw: &str) -> Cell {
        if is_missing_token(raw) {
            return Cell::Missing;
        }
        let trimmed = ascii_trim(raw);
        if let Ok(value) = trimmed.parse::<i64>() {
            return Cell::Int(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Float(value),
            _ => Cell::Text(raw.to_string()),
        }
    }

    /// True for the missing marker. A NaN float counts as missing too.
    #[inline]
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Float(value) => value.is_nan(),
            Cell::Int(_) | Cell::Text(_) => false,
        }
    }

    /// True for cells that already hold a float (or nothing).
    #[inline]
    pub fn is_float_typed(&self) -> bool {
        matches!(self, Cell::Missing | Cell::Float(_))
    }

    /// Numeric view of the cell; text is parsed after ASCII-trim.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Missing => None,
            Cell::Int(value) => Some(*value as f64),
            Cell::Float(value) if value.is_finite() => Some(*value),
            Cell::Float(_) => None,
            Cell::Text(raw) => ascii_trim(raw)
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
        }
    }

    /// True if the cell numerically equals `code`. Text and missing never match.
    #[inline]
    pub fn matches_code(&self, code: i64) -> bool {
        match self {
            Cell::Int(value) => *value == code,
            Cell::Float(value) => *value == code as f64,
            Cell::Missing | Cell::Text(_) => false,
        }
    }
}

/// CSV rendering: missing is an empty field, floats use the shortest form.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Float(value) if value.is_nan() => Ok(()),
            Cell::Float(value) => f.write_str(&format_float_shortest(*value)),
            Cell::Text(raw) => f.write_str(raw),
        }
    }
}

/// Tokens read as missing, matched exactly (case-sensitive) after ASCII-trim.
/// Same set as the common dataframe NA defaults; `-` and `NONE` are values.
pub const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if the input is empty or a [`MISSING_TOKENS`] entry after
/// ASCII-trimming.
#[inline]
pub fn is_missing_token(input: &str) -> bool {
    let trimmed = ascii_trim(input);
    trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed)
}
