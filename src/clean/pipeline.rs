//! `clean_data`: the full cleaning pass over a population/customers pair.

use std::time::{Duration, Instant};

use tracing::info;

use crate::clean::columns::{ColumnRemoval, ReportChoice, remove_missing_columns};
use crate::clean::fix::{DEFAULT_FIX_COLUMNS, fix_columns, is_float_typed};
use crate::clean::report::{MissingReport, missing_report};
use crate::clean::rows::remove_missing_rows;
use crate::clean::unknowns::{ResolveStats, replace_unknowns};
use crate::metadata::AttributeTable;
use crate::refusal::{InputFile, Refusal};
use crate::table::Dataset;

pub const DEFAULT_COLUMN_MISS_PERC: f64 = 30.0;
pub const DEFAULT_ROW_MISS_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct CleanConfig {
    /// Columns missing more than this percentage are dropped.
    pub column_miss_perc: f64,
    /// Rows missing more than this many features are dropped.
    pub row_miss_count: usize,
    pub fix_columns: Vec<String>,
    pub verbose: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            column_miss_perc: DEFAULT_COLUMN_MISS_PERC,
            row_miss_count: DEFAULT_ROW_MISS_COUNT,
            fix_columns: DEFAULT_FIX_COLUMNS.iter().map(|name| name.to_string()).collect(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn of(dataset: &Dataset) -> Self {
        Self {
            rows: dataset.n_rows(),
            columns: dataset.n_columns(),
        }
    }
}

/// Per-dataset counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetSummary {
    pub before: Shape,
    pub after: Shape,
    /// False when the fix columns were already float typed.
    pub fixed: bool,
    pub resolved: ResolveStats,
    pub removed_rows: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanSummary {
    /// Customer columns the population lacks.
    pub extra_customer_columns: Vec<String>,
    pub population: DatasetSummary,
    pub customers: DatasetSummary,
    pub removed_columns: ColumnRemoval,
    pub elapsed: Duration,
}

impl CleanSummary {
    /// Dataset whose report supplied the removed columns.
    pub fn reference_file(&self) -> InputFile {
        match self.removed_columns.reference {
            ReportChoice::First => InputFile::Customers,
            ReportChoice::Second => InputFile::Population,
        }
    }
}

/// Intermediate state kept for the plots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diagnostics {
    /// Reports after unknown resolution, before any pruning.
    pub population_report: MissingReport,
    pub customers_report: MissingReport,
    /// Missing features per row as seen by the row pruner.
    pub population_row_missing: Vec<usize>,
    pub customers_row_missing: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutput {
    pub population: Dataset,
    pub customers: Dataset,
    pub summary: CleanSummary,
    pub diagnostics: Diagnostics,
}

/// Fix, resolve and prune both datasets. Any failure aborts the whole call.
pub fn clean_data(
    mut population: Dataset,
    mut customers: Dataset,
    mut attributes: AttributeTable,
    config: &CleanConfig,
) -> Result<CleanOutput, Refusal> {
    let started = Instant::now();
    let mut population_summary = DatasetSummary {
        before: Shape::of(&population),
        ..DatasetSummary::default()
    };
    let mut customers_summary = DatasetSummary {
        before: Shape::of(&customers),
        ..DatasetSummary::default()
    };

    let extra_customer_columns: Vec<String> = customers
        .column_names()
        .filter(|name| !population.has_column(name))
        .map(str::to_string)
        .collect();
    info!(
        columns = ?extra_customer_columns,
        "customer columns not in population"
    );

    attributes.forward_fill();
    let unknown_rows = attributes.unknown_rows()?;

    info!("fixing column types");
    customers_summary.fixed = fix_if_needed(&mut customers, InputFile::Customers, config)?;
    population_summary.fixed = fix_if_needed(&mut population, InputFile::Population, config)?;

    info!("replacing unknown values with missing");
    population_summary.resolved = replace_unknowns(&mut population, &unknown_rows, config.verbose)?;
    customers_summary.resolved = replace_unknowns(&mut customers, &unknown_rows, config.verbose)?;

    let population_report = missing_report(&population);
    let customers_report = missing_report(&customers);

    info!(
        threshold = config.column_miss_perc,
        "removing columns above missing percentage"
    );
    let removed_columns = remove_missing_columns(
        &mut population,
        &mut customers,
        &customers_report,
        &population_report,
        config.column_miss_perc,
    );

    let customers_row_missing = customers.row_missing_counts();
    let population_row_missing = population.row_missing_counts();
    info!(
        threshold = config.row_miss_count,
        "removing rows above missing count"
    );
    customers_summary.removed_rows =
        remove_missing_rows(&mut customers, config.row_miss_count, "customers");
    population_summary.removed_rows =
        remove_missing_rows(&mut population, config.row_miss_count, "population");

    population_summary.after = Shape::of(&population);
    customers_summary.after = Shape::of(&customers);
    let elapsed = started.elapsed();
    info!(elapsed_secs = elapsed.as_secs_f64(), "cleaning finished");

    Ok(CleanOutput {
        population,
        customers,
        summary: CleanSummary {
            extra_customer_columns,
            population: population_summary,
            customers: customers_summary,
            removed_columns,
            elapsed,
        },
        diagnostics: Diagnostics {
            population_report,
            customers_report,
            population_row_missing,
            customers_row_missing,
        },
    })
}

fn fix_if_needed(
    dataset: &mut Dataset,
    file: InputFile,
    config: &CleanConfig,
) -> Result<bool, Refusal> {
    if is_float_typed(dataset, &config.fix_columns) {
        return Ok(false);
    }
    fix_columns(dataset, &config.fix_columns)
        .map_err(|err| Refusal::from_fix_error(file, err))?;
    Ok(true)
}
