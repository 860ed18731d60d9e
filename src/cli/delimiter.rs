//! Delimiter flag parsing & validation.

use std::fmt;

/// Keyword spellings accepted for `--delimiter`.
const NAMED: [(&str, u8); 5] = [
    ("comma", b','),
    ("tab", b'\t'),
    ("semicolon", b';'),
    ("pipe", b'|'),
    ("caret", b'^'),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    Empty,
    InvalidHex,
    InvalidValue,
    NonAscii,
    InvalidByte(u8),
}

impl fmt::Display for DelimiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterError::Empty => write!(f, "delimiter is empty"),
            DelimiterError::InvalidHex => write!(f, "invalid hex delimiter; expected 0xNN"),
            DelimiterError::InvalidValue => write!(
                f,
                "invalid delimiter; expected a name, 0xNN or one ASCII character"
            ),
            DelimiterError::NonAscii => write!(f, "delimiter must be a single ASCII byte"),
            DelimiterError::InvalidByte(byte) => {
                write!(f, "invalid delimiter byte 0x{byte:02X}")
            }
        }
    }
}

impl std::error::Error for DelimiterError {}

/// Parse a delimiter flag: a keyword from [`NAMED`] (any case), `0xNN`, or a
/// single ASCII character.
pub fn parse_delimiter_arg(raw: &str) -> Result<u8, DelimiterError> {
    if raw.is_empty() {
        return Err(DelimiterError::Empty);
    }

    let lower = raw.to_ascii_lowercase();
    if let Some((_, byte)) = NAMED.iter().find(|(name, _)| *name == lower) {
        return Ok(*byte);
    }

    if let Some(hex) = lower.strip_prefix("0x") {
        if hex.len() != 2 {
            return Err(DelimiterError::InvalidHex);
        }
        let byte = u8::from_str_radix(hex, 16).map_err(|_| DelimiterError::InvalidHex)?;
        return validate_delimiter_byte(byte);
    }

    let mut chars = raw.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(DelimiterError::InvalidValue);
    };
    if !ch.is_ascii() {
        return Err(DelimiterError::NonAscii);
    }
    validate_delimiter_byte(ch as u8)
}

/// Quotes and line breaks can't separate fields.
fn validate_delimiter_byte(byte: u8) -> Result<u8, DelimiterError> {
    match byte {
        0 | 0x80..=0xFF | b'"' | b'\r' | b'\n' => Err(DelimiterError::InvalidByte(byte)),
        _ => Ok(byte),
    }
}
