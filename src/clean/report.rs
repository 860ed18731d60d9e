//! Per-column missingness report.

use crate::table::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub struct MissingEntry {
    pub attribute: String,
    /// Missing cells as a percentage of rows, 0–100.
    pub missing_percentage: f64,
}

/// One entry per dataset column, in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MissingReport {
    entries: Vec<MissingEntry>,
}

impl MissingReport {
    pub fn new(entries: Vec<MissingEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MissingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn percentage(&self, attribute: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.attribute == attribute)
            .map(|entry| entry.missing_percentage)
    }

    /// Entries strictly above `threshold`, in report order.
    pub fn above(&self, threshold: f64) -> impl Iterator<Item = &MissingEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.missing_percentage > threshold)
    }

    /// Names of the attributes strictly above `threshold`.
    pub fn attributes_above(&self, threshold: f64) -> Vec<String> {
        self.above(threshold)
            .map(|entry| entry.attribute.clone())
            .collect()
    }
}

/// Compute the missing percentage of every column. A dataset without rows
/// reports 0 everywhere.
pub fn missing_report(dataset: &Dataset) -> MissingReport {
    let rows = dataset.n_rows();
    let entries = dataset
        .columns()
        .iter()
        .map(|column| {
            let missing = column.cells.iter().filter(|cell| cell.is_missing()).count();
            let missing_percentage = if rows == 0 {
                0.0
            } else {
                missing as f64 * 100.0 / rows as f64
            };
            MissingEntry {
                attribute: column.name.clone(),
                missing_percentage,
            }
        })
        .collect();
    MissingReport { entries }
}
