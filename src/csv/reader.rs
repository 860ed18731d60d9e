//! CSV table loading: guard → parse → header normalization → width checks.

use std::io::Cursor;

use csv::{ByteRecord, Reader};

use crate::csv::input::{EncodingIssue, guard_input_bytes};
use crate::normalize::headers::normalize_headers;
use crate::normalize::trim::is_ascii_blank_str;

/// Header plus raw string records, all normalized to the header width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableReadError {
    Encoding(EncodingIssue),
    CsvParse { line: Option<u64> },
    MissingHeader,
    DuplicateHeader { name: String },
    /// A record carries non-blank fields beyond the header width.
    ExtraFields { record: u64 },
}

/// Build a CSV reader with the requested delimiter.
pub fn build_reader<R: std::io::Read>(reader: R, delimiter: u8) -> Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(reader)
}

/// Parse CSV bytes into a [`RawTable`].
///
/// Blank lines are skipped. Short records are padded with empty fields;
/// extra trailing fields must be blank.
pub fn read_table(bytes: &[u8], delimiter: u8) -> Result<RawTable, TableReadError> {
    let guarded = guard_input_bytes(bytes).map_err(TableReadError::Encoding)?;
    let mut reader = build_reader(Cursor::new(guarded), delimiter);
    let mut record = ByteRecord::new();
    let mut headers: Option<Vec<String>> = None;
    let mut records = Vec::new();
    let mut data_index: u64 = 0;

    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                return Err(TableReadError::CsvParse {
                    line: err.position().map(|pos| pos.line()),
                });
            }
        }

        let record_number = if headers.is_some() { data_index + 1 } else { 0 };
        let fields = decode_fields(&record, record_number)?;
        if is_blank_line(&fields) {
            continue;
        }

        if headers.is_none() {
            let normalized = normalize_headers(fields.iter().map(String::as_str))
                .map_err(|err| TableReadError::DuplicateHeader { name: err.name })?;
            headers = Some(normalized);
            continue;
        }

        data_index += 1;
        let header_len = headers.as_ref().map(Vec::len).unwrap_or(0);
        records.push(normalize_width(fields, header_len, data_index)?);
    }

    let headers = headers.ok_or(TableReadError::MissingHeader)?;
    Ok(RawTable { headers, records })
}

/// A line with a single blank field. Delimited all-blank records are kept:
/// they are rows whose every cell is missing.
fn is_blank_line(fields: &[String]) -> bool {
    fields.len() <= 1 && fields.iter().all(|field| is_ascii_blank_str(field))
}

fn decode_fields(record: &ByteRecord, record_number: u64) -> Result<Vec<String>, TableReadError> {
    record
        .iter()
        .map(|field| {
            std::str::from_utf8(field)
                .map(str::to_string)
                .map_err(|_| {
                    TableReadError::Encoding(EncodingIssue::InvalidUtf8 {
                        record: record_number,
                    })
                })
        })
        .collect()
}

fn normalize_width(
    mut fields: Vec<String>,
    header_len: usize,
    record_number: u64,
) -> Result<Vec<String>, TableReadError> {
    if fields.len() > header_len {
        if fields[header_len..]
            .iter()
            .any(|field| !is_ascii_blank_str(field))
        {
            return Err(TableReadError::ExtraFields {
                record: record_number,
            });
        }
        fields.truncate(header_len);
    }
    fields.resize(header_len, String::new());
    Ok(fields)
}
