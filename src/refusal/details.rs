//! Refusal detail payloads & next steps.
//!
//! Each payload carries the concrete example that triggered it (file,
//! column, row, value) plus a deterministic "next" remediation.

use std::fmt;

use crate::clean::{FixError, UnknownCodeError};
use crate::csv::input::EncodingIssue;
use crate::csv::reader::TableReadError;
use crate::metadata::{MissingMetadataColumn, UnnamedUnknownRow};
use crate::refusal::codes::RefusalCode;

/// Which input a refusal points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    Population,
    Customers,
    Attributes,
}

impl InputFile {
    pub fn as_str(self) -> &'static str {
        match self {
            InputFile::Population => "population",
            InputFile::Customers => "customers",
            InputFile::Attributes => "attributes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadersIssue {
    MissingHeader,
    Duplicate { name: String },
    ExtraFields { record: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefusalKind {
    Io {
        target: String,
        error: String,
    },
    Encoding {
        file: InputFile,
        issue: EncodingIssue,
    },
    CsvParse {
        file: InputFile,
        line: Option<u64>,
    },
    Headers {
        file: InputFile,
        issue: HeadersIssue,
    },
    Metadata {
        column: String,
    },
    UnnamedUnknown {
        row: usize,
    },
    UnknownCode {
        attribute: String,
        token: String,
    },
    NoColumn {
        file: InputFile,
        column: String,
    },
    Unparseable {
        file: InputFile,
        column: String,
        row: u64,
        value: String,
    },
}

impl RefusalKind {
    pub fn code(&self) -> RefusalCode {
        match self {
            RefusalKind::Io { .. } => RefusalCode::Io,
            RefusalKind::Encoding { .. } => RefusalCode::Encoding,
            RefusalKind::CsvParse { .. } => RefusalCode::CsvParse,
            RefusalKind::Headers { .. } => RefusalCode::Headers,
            RefusalKind::Metadata { .. } => RefusalCode::Metadata,
            RefusalKind::UnnamedUnknown { .. } => RefusalCode::Metadata,
            RefusalKind::UnknownCode { .. } => RefusalCode::UnknownCode,
            RefusalKind::NoColumn { .. } => RefusalCode::NoColumn,
            RefusalKind::Unparseable { .. } => RefusalCode::Unparseable,
        }
    }

    /// One-line description of the concrete example.
    pub fn message(&self) -> String {
        match self {
            RefusalKind::Io { target, error } => format!("{target}: {error}"),
            RefusalKind::Encoding { file, issue } => {
                format!("{} file: {}", file.as_str(), issue.describe())
            }
            RefusalKind::CsvParse { file, line } => match line {
                Some(line) => format!("{} file: parse error at line {line}", file.as_str()),
                None => format!("{} file: parse error", file.as_str()),
            },
            RefusalKind::Headers { file, issue } => match issue {
                HeadersIssue::MissingHeader => format!("{} file: no header row", file.as_str()),
                HeadersIssue::Duplicate { name } => {
                    format!("{} file: duplicate header {name:?}", file.as_str())
                }
                HeadersIssue::ExtraFields { record } => format!(
                    "{} file: record {record} has more fields than the header",
                    file.as_str()
                ),
            },
            RefusalKind::Metadata { column } => {
                format!("attributes file: no {column:?} column")
            }
            RefusalKind::UnnamedUnknown { row } => {
                format!("attributes file: unknown row {row} has no attribute name")
            }
            RefusalKind::UnknownCode { attribute, token } => {
                format!("attribute {attribute}: unknown code {token:?} is not an integer")
            }
            RefusalKind::NoColumn { file, column } => {
                format!("{} file: no column {column:?}", file.as_str())
            }
            RefusalKind::Unparseable {
                file,
                column,
                row,
                value,
            } => format!(
                "{} file: column {column} row {row}: {value:?} is not a number",
                file.as_str()
            ),
        }
    }

    pub fn default_next(&self) -> String {
        match self {
            RefusalKind::Io { .. } => "check file paths/permissions and rerun".to_string(),
            RefusalKind::Encoding { .. } => "re-export the file as UTF-8 CSV and rerun".to_string(),
            RefusalKind::CsvParse { .. } => {
                "re-export as standard CSV (or pass --delimiter) and rerun".to_string()
            }
            RefusalKind::Headers { issue, .. } => match issue {
                HeadersIssue::MissingHeader => {
                    "ensure the file has a header row and rerun".to_string()
                }
                HeadersIssue::Duplicate { .. } => "make header names unique and rerun".to_string(),
                HeadersIssue::ExtraFields { .. } => {
                    "remove extra fields or re-export with consistent headers, then rerun"
                        .to_string()
                }
            },
            RefusalKind::Metadata { .. } => {
                "export the metadata with Attribute, Meaning and Value columns and rerun"
                    .to_string()
            }
            RefusalKind::UnnamedUnknown { .. } => {
                "name the attribute on the first row of each group and rerun".to_string()
            }
            RefusalKind::UnknownCode { .. } => {
                "list unknown codes as comma-separated integers and rerun".to_string()
            }
            RefusalKind::NoColumn { .. } => {
                "pass the columns to retype with --fix-column and rerun".to_string()
            }
            RefusalKind::Unparseable { .. } => {
                "clean the value or exclude the column from --fix-column, then rerun".to_string()
            }
        }
    }
}

/// A pipeline failure with its remediation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refusal {
    pub kind: RefusalKind,
    /// Next-step remediation (without "Next:" prefix).
    pub next: String,
}

impl Refusal {
    pub fn new(kind: RefusalKind) -> Self {
        let next = kind.default_next();
        Self { kind, next }
    }

    pub fn code(&self) -> RefusalCode {
        self.kind.code()
    }

    pub fn io(target: impl Into<String>, error: &std::io::Error) -> Self {
        Self::new(RefusalKind::Io {
            target: target.into(),
            error: error.to_string(),
        })
    }

    pub fn from_table_error(file: InputFile, err: TableReadError) -> Self {
        let kind = match err {
            TableReadError::Encoding(issue) => RefusalKind::Encoding { file, issue },
            TableReadError::CsvParse { line } => RefusalKind::CsvParse { file, line },
            TableReadError::MissingHeader => RefusalKind::Headers {
                file,
                issue: HeadersIssue::MissingHeader,
            },
            TableReadError::DuplicateHeader { name } => RefusalKind::Headers {
                file,
                issue: HeadersIssue::Duplicate { name },
            },
            TableReadError::ExtraFields { record } => RefusalKind::Headers {
                file,
                issue: HeadersIssue::ExtraFields { record },
            },
        };
        Self::new(kind)
    }

    pub fn from_fix_error(file: InputFile, err: FixError) -> Self {
        let kind = match err {
            FixError::NoColumn { column } => RefusalKind::NoColumn { file, column },
            FixError::Unparseable { column, row, value } => RefusalKind::Unparseable {
                file,
                column,
                row,
                value,
            },
        };
        Self::new(kind)
    }
}

impl From<UnknownCodeError> for Refusal {
    fn from(err: UnknownCodeError) -> Self {
        Self::new(RefusalKind::UnknownCode {
            attribute: err.attribute,
            token: err.token,
        })
    }
}

impl From<MissingMetadataColumn> for Refusal {
    fn from(err: MissingMetadataColumn) -> Self {
        Self::new(RefusalKind::Metadata {
            column: err.column.to_string(),
        })
    }
}

impl From<UnnamedUnknownRow> for Refusal {
    fn from(err: UnnamedUnknownRow) -> Self {
        Self::new(RefusalKind::UnnamedUnknown { row: err.row })
    }
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.kind.message())
    }
}

impl std::error::Error for Refusal {}
