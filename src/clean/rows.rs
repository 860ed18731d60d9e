//! Row pruning by missing-feature count.

use tracing::info;

use crate::table::Dataset;

/// Minimum number of present cells a row needs to survive.
#[inline]
pub fn min_present(columns: usize, threshold: usize) -> usize {
    columns.saturating_sub(threshold)
}

/// Drop rows with fewer than `columns − threshold` present cells. Survivors
/// keep their order and are re-indexed from 0. Returns the removed count.
pub fn remove_missing_rows(dataset: &mut Dataset, threshold: usize, name: &str) -> usize {
    let total_rows = dataset.n_rows();
    let columns = dataset.n_columns();
    let required = min_present(columns, threshold);

    let keep: Vec<bool> = dataset
        .row_missing_counts()
        .into_iter()
        .map(|missing| columns - missing >= required)
        .collect();
    dataset.retain_rows(&keep);

    let removed = total_rows - dataset.n_rows();
    info!(removed, dataset = name, "removed rows");
    removed
}
