//! Cleaned dataset output.

use std::io::Write;

use crate::table::Dataset;

/// Write a header record followed by one record per row.
pub fn write_dataset<W: Write>(
    dataset: &Dataset,
    writer: W,
    delimiter: u8,
) -> Result<(), csv::Error> {
    let mut csv = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    csv.write_record(dataset.column_names())?;
    for row in (0..dataset.n_rows()).filter_map(|index| dataset.row(index)) {
        csv.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    csv.flush()?;
    Ok(())
}
