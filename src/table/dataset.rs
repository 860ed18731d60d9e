//! Column-major in-memory table.
//!
//! Rows are positional: after rows are removed the survivors are densely
//! re-indexed from 0 in their original relative order.

use crate::table::cell::Cell;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from row-major cells. Short rows are padded with
    /// `Missing`; cells beyond the header width are dropped.
    pub fn from_rows<I>(headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::new(),
            })
            .collect();
        let mut count = 0;
        for row in rows {
            let mut cells = row.into_iter();
            for column in &mut columns {
                column.cells.push(cells.next().unwrap_or(Cell::Missing));
            }
            count += 1;
        }
        Self {
            columns,
            rows: count,
        }
    }

    /// Type raw string records into cells.
    pub fn from_records(headers: Vec<String>, records: &[Vec<String>]) -> Self {
        Self::from_rows(
            headers,
            records
                .iter()
                .map(|record| record.iter().map(|raw| Cell::parse(raw)).collect()),
        )
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    /// Cells of one row, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Cell>> {
        if index >= self.rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|column| &column.cells[index])
                .collect(),
        )
    }

    /// Drop every column whose name is listed. Unknown names are ignored.
    /// Returns the number of columns actually removed.
    pub fn drop_columns(&mut self, names: &[String]) -> usize {
        let before = self.columns.len();
        self.columns
            .retain(|column| !names.iter().any(|name| *name == column.name));
        before - self.columns.len()
    }

    /// Keep rows where `keep[row]` is true. `keep` must cover every row.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.rows);
        for column in &mut self.columns {
            let mut flags = keep.iter();
            column
                .cells
                .retain(|_| flags.next().copied().unwrap_or(false));
        }
        self.rows = keep.iter().filter(|flag| **flag).count();
    }

    /// Missing-cell count per row.
    pub fn row_missing_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.rows];
        for column in &self.columns {
            for (count, cell) in counts.iter_mut().zip(&column.cells) {
                if cell.is_missing() {
                    *count += 1;
                }
            }
        }
        counts
    }
}
