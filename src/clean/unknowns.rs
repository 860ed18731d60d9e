//! Unknown-value resolution.
//!
//! For each attribute in the metadata, the codes documented as "unknown" are
//! replaced with the missing marker in the matching dataset column.

use tracing::debug;

use crate::metadata::AttributeTable;
use crate::normalize::trim::ascii_trim;
use crate::table::{Cell, Dataset};

/// An unknown-code token that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCodeError {
    pub attribute: String,
    pub token: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Metadata attributes that matched a dataset column.
    pub attributes: usize,
    /// Cells replaced with the missing marker.
    pub cells: usize,
}

/// Integer codes that mean "unknown" for `attribute`.
///
/// All value fields of the attribute's rows are joined with `,` and split
/// again, so both `"-1, 0"` and one-code-per-row layouts work.
pub fn unknown_codes(
    attribute: &str,
    unknown_rows: &AttributeTable,
) -> Result<Vec<i64>, UnknownCodeError> {
    let joined = unknown_rows
        .values_for(attribute)
        .collect::<Vec<_>>()
        .join(",");
    joined
        .split(',')
        .map(|token| {
            ascii_trim(token)
                .parse::<i64>()
                .map_err(|_| UnknownCodeError {
                    attribute: attribute.to_string(),
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Replace unknown codes with the missing marker in every column named by
/// the metadata. Attributes without a column are skipped.
///
/// Codes are validated for every attribute, including those the dataset
/// lacks, so a malformed metadata table fails the same way for both inputs.
pub fn replace_unknowns(
    dataset: &mut Dataset,
    unknown_rows: &AttributeTable,
    verbose: bool,
) -> Result<ResolveStats, UnknownCodeError> {
    let mut stats = ResolveStats::default();
    for attribute in unknown_rows.unique_attributes() {
        let codes = unknown_codes(attribute, unknown_rows)?;
        let Some(column) = dataset.column_mut(attribute) else {
            continue;
        };
        if verbose {
            debug!(attribute, ?codes, "replacing unknown codes with missing");
        }
        stats.attributes += 1;
        for cell in &mut column.cells {
            if codes.iter().any(|code| cell.matches_code(*code)) {
                *cell = Cell::Missing;
                stats.cells += 1;
            }
        }
    }
    Ok(stats)
}
