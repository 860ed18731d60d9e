use std::fmt;
use std::str::FromStr;

/// Canonical refusal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefusalCode {
    Io,
    Encoding,
    CsvParse,
    Headers,
    Metadata,
    UnknownCode,
    NoColumn,
    Unparseable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownRefusalCode;

impl RefusalCode {
    pub const ALL: [RefusalCode; 8] = [
        RefusalCode::Io,
        RefusalCode::Encoding,
        RefusalCode::CsvParse,
        RefusalCode::Headers,
        RefusalCode::Metadata,
        RefusalCode::UnknownCode,
        RefusalCode::NoColumn,
        RefusalCode::Unparseable,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            RefusalCode::Io => "E_IO",
            RefusalCode::Encoding => "E_ENCODING",
            RefusalCode::CsvParse => "E_CSV_PARSE",
            RefusalCode::Headers => "E_HEADERS",
            RefusalCode::Metadata => "E_METADATA",
            RefusalCode::UnknownCode => "E_UNKNOWN_CODE",
            RefusalCode::NoColumn => "E_NO_COLUMN",
            RefusalCode::Unparseable => "E_UNPARSEABLE",
        }
    }

    /// A short, stable reason label for human output.
    #[inline]
    pub const fn reason(self) -> &'static str {
        match self {
            RefusalCode::Io => "file read/write error",
            RefusalCode::Encoding => "unsupported text encoding",
            RefusalCode::CsvParse => "CSV parse failure",
            RefusalCode::Headers => "invalid or duplicate headers",
            RefusalCode::Metadata => "attribute metadata lacks a required column or name",
            RefusalCode::UnknownCode => "non-integer unknown code in attribute metadata",
            RefusalCode::NoColumn => "column to retype is missing",
            RefusalCode::Unparseable => "value cannot be parsed as a number",
        }
    }
}

impl fmt::Display for RefusalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownRefusalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown refusal code")
    }
}

impl std::error::Error for UnknownRefusalCode {}

impl FromStr for RefusalCode {
    type Err = UnknownRefusalCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RefusalCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or(UnknownRefusalCode)
    }
}
