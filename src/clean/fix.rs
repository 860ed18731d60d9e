//! Column-type fixer for the malformed CAMEO columns.
//!
//! Two explicit steps per column: substitute the sentinel tokens with the
//! missing marker, then parse every remaining cell as a float.

use crate::normalize::trim::ascii_trim;
use crate::table::{Cell, Dataset};

/// Columns that arrive with `X`/`XX` mixed into numeric codes.
pub const DEFAULT_FIX_COLUMNS: [&str; 2] = ["CAMEO_DEUG_2015", "CAMEO_INTL_2015"];

/// Tokens that stand for "no value" in the fixed columns.
pub const SENTINEL_TOKENS: [&str; 2] = ["X", "XX"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixError {
    /// A designated column is not in the dataset.
    NoColumn { column: String },
    /// A residue that is neither a sentinel nor a number (1-based row).
    Unparseable {
        column: String,
        row: u64,
        value: String,
    },
}

/// True when every designated column exists and holds only floats or
/// missing markers.
pub fn is_float_typed(dataset: &Dataset, columns: &[String]) -> bool {
    columns.iter().all(|name| {
        dataset
            .column(name)
            .is_some_and(|column| column.cells.iter().all(Cell::is_float_typed))
    })
}

/// Retype the designated columns to floats. Nothing is modified unless every
/// column exists and every residue parses.
pub fn fix_columns(dataset: &mut Dataset, columns: &[String]) -> Result<(), FixError> {
    if let Some(absent) = columns.iter().find(|name| !dataset.has_column(name)) {
        return Err(FixError::NoColumn {
            column: absent.clone(),
        });
    }

    let mut retyped = Vec::with_capacity(columns.len());
    for name in columns {
        let Some(column) = dataset.column(name) else {
            continue;
        };
        let substituted = column.cells.iter().map(substitute_sentinel);
        let parsed = substituted
            .enumerate()
            .map(|(index, cell)| {
                coerce_float(cell).map_err(|value| FixError::Unparseable {
                    column: name.clone(),
                    row: index as u64 + 1,
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        retyped.push((name, parsed));
    }

    for (name, cells) in retyped {
        if let Some(column) = dataset.column_mut(name) {
            column.cells = cells;
        }
    }
    Ok(())
}

fn substitute_sentinel(cell: &Cell) -> Cell {
    match cell {
        Cell::Text(raw) if SENTINEL_TOKENS.contains(&ascii_trim(raw)) => Cell::Missing,
        other => other.clone(),
    }
}

fn coerce_float(cell: Cell) -> Result<Cell, String> {
    if cell.is_missing() {
        return Ok(Cell::Missing);
    }
    match cell.as_f64() {
        Some(value) => Ok(Cell::Float(value)),
        None => Err(cell.to_string()),
    }
}
