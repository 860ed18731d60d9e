//! Attribute metadata table: (Attribute, Meaning, Value) rows.
//!
//! The attribute name is only filled on the first row of each group, so the
//! table has to be forward-filled before values can be looked up by name.

use crate::csv::reader::RawTable;
use crate::normalize::trim::ascii_trim;

pub const ATTRIBUTE_COLUMN: &str = "Attribute";
pub const MEANING_COLUMN: &str = "Meaning";
pub const VALUE_COLUMN: &str = "Value";

/// Meaning label marking a value as "not reported".
pub const UNKNOWN_MEANING: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub attribute: Option<String>,
    pub meaning: Option<String>,
    pub value: Option<String>,
}

impl AttributeRow {
    pub fn new(attribute: Option<&str>, meaning: &str, value: &str) -> Self {
        Self {
            attribute: attribute.map(str::to_string),
            meaning: Some(meaning.to_string()),
            value: Some(value.to_string()),
        }
    }
}

/// The metadata table lacks a required column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMetadataColumn {
    pub column: &'static str,
}

/// An "unknown" row with no attribute name above it to inherit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnnamedUnknownRow {
    /// 1-based position among the metadata rows.
    pub row: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeTable {
    rows: Vec<AttributeRow>,
}

impl AttributeTable {
    pub fn new(rows: Vec<AttributeRow>) -> Self {
        Self { rows }
    }

    /// Pick the three required columns out of a raw CSV table. Other columns
    /// are ignored; blank fields become `None`.
    pub fn from_raw(table: &RawTable) -> Result<Self, MissingMetadataColumn> {
        let position = |column: &'static str| {
            table
                .headers
                .iter()
                .position(|header| header == column)
                .ok_or(MissingMetadataColumn { column })
        };
        let attribute = position(ATTRIBUTE_COLUMN)?;
        let meaning = position(MEANING_COLUMN)?;
        let value = position(VALUE_COLUMN)?;

        let rows = table
            .records
            .iter()
            .map(|record| AttributeRow {
                attribute: non_blank(&record[attribute]),
                meaning: non_blank(&record[meaning]),
                value: non_blank(&record[value]),
            })
            .collect();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[AttributeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Give every row without an attribute name the name of the nearest row
    /// above it. Leading rows without a name stay unnamed.
    pub fn forward_fill(&mut self) {
        let mut last: Option<String> = None;
        for row in &mut self.rows {
            match &row.attribute {
                Some(name) => last = Some(name.clone()),
                None => row.attribute = last.clone(),
            }
        }
    }

    /// Rows whose meaning is exactly [`UNKNOWN_MEANING`]. Every such row
    /// must carry an attribute name, so call after [`Self::forward_fill`].
    pub fn unknown_rows(&self) -> Result<AttributeTable, UnnamedUnknownRow> {
        let mut rows = Vec::new();
        for (index, row) in self.rows.iter().enumerate() {
            if row.meaning.as_deref() != Some(UNKNOWN_MEANING) {
                continue;
            }
            if row.attribute.is_none() {
                return Err(UnnamedUnknownRow { row: index + 1 });
            }
            rows.push(row.clone());
        }
        Ok(AttributeTable { rows })
    }

    /// Distinct attribute names in first-appearance order.
    pub fn unique_attributes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.rows.iter().filter_map(|row| row.attribute.as_deref()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Value fields of every row named `attribute`; a blank value is `""`.
    pub fn values_for<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.attribute.as_deref() == Some(attribute))
            .map(|row| row.value.as_deref().unwrap_or(""))
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = ascii_trim(raw);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
