// Human CLEANED body.

use crate::clean::{CleanSummary, DatasetSummary, Shape};
use crate::format::numbers::{format_count, format_elapsed};
use crate::output::human::header::render_names;

/// Paths of the written cleaned CSVs.
#[derive(Debug, Clone, Copy)]
pub struct Written<'a> {
    pub population: &'a str,
    pub customers: &'a str,
}

pub fn render_summary_body(summary: &CleanSummary, written: Option<Written<'_>>) -> Vec<String> {
    let mut lines = vec![
        render_dataset("Population", &summary.population),
        render_dataset("Customers", &summary.customers),
        format!(
            "Extra customer columns ({}): {}",
            format_count(summary.extra_customer_columns.len()),
            render_names(&summary.extra_customer_columns)
        ),
        format!(
            "Unknowns replaced: population={} cells ({} attributes) customers={} cells ({} attributes)",
            format_count(summary.population.resolved.cells),
            format_count(summary.population.resolved.attributes),
            format_count(summary.customers.resolved.cells),
            format_count(summary.customers.resolved.attributes)
        ),
        format!(
            "Removed columns ({}, {} report): {}",
            format_count(summary.removed_columns.columns.len()),
            summary.reference_file().as_str(),
            render_names(&summary.removed_columns.columns)
        ),
        format!(
            "Removed rows: population={} customers={}",
            format_count(summary.population.removed_rows),
            format_count(summary.customers.removed_rows)
        ),
        format!("Elapsed: {}", format_elapsed(summary.elapsed)),
    ];
    if let Some(written) = written {
        lines.push(format!(
            "Wrote: {} {}",
            written.population, written.customers
        ));
    }
    lines
}

fn render_dataset(label: &str, dataset: &DatasetSummary) -> String {
    let fixed = if dataset.fixed { "" } else { " (already float)" };
    format!(
        "{label}: {} -> {}{fixed}",
        render_shape(dataset.before),
        render_shape(dataset.after)
    )
}

fn render_shape(shape: Shape) -> String {
    format!(
        "{} rows x {} columns",
        format_count(shape.rows),
        format_count(shape.columns)
    )
}
