use std::path::PathBuf;

use clap::Parser;

use super::delimiter::parse_delimiter_arg;
use crate::clean::CleanConfig;
use crate::clean::fix::DEFAULT_FIX_COLUMNS;
use crate::clean::pipeline::{DEFAULT_COLUMN_MISS_PERC, DEFAULT_ROW_MISS_COUNT};
use crate::plot::{DEFAULT_BINS, PlotSize};

const DEFAULT_PLOT_MIN_PERCENTAGE: f64 = 0.0;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "segclean",
    about = "Clean a population/customers dataset pair using attribute metadata.",
    override_usage = "segclean <population.csv> <customers.csv> <attributes.csv> [--column-miss-perc <float>] [--row-miss-count <int>] [--fix-column <name>]... [--out-dir <dir>] [--plot] [--json]"
)]
pub struct Args {
    /// General-population CSV path.
    #[arg(value_name = "POPULATION_CSV")]
    pub population: PathBuf,

    /// Customers CSV path.
    #[arg(value_name = "CUSTOMERS_CSV")]
    pub customers: PathBuf,

    /// Attribute metadata CSV path (Attribute, Meaning, Value columns).
    #[arg(value_name = "ATTRIBUTES_CSV")]
    pub attributes: PathBuf,

    /// Drop columns missing more than this percentage: 0 <= x <= 100 (default: 30).
    #[arg(
        long,
        value_name = "FLOAT",
        default_value_t = DEFAULT_COLUMN_MISS_PERC,
        value_parser = parse_percentage
    )]
    pub column_miss_perc: f64,

    /// Drop rows missing more than this many features (default: 50).
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_ROW_MISS_COUNT)]
    pub row_miss_count: usize,

    /// Column to retype to float (repeatable; default: CAMEO_DEUG_2015, CAMEO_INTL_2015).
    #[arg(long = "fix-column", value_name = "NAME")]
    pub fix_columns: Vec<String>,

    /// Dataset delimiter (comma/tab/semicolon/pipe/caret, 0xNN, or single ASCII byte).
    #[arg(long, value_name = "DELIM", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Metadata delimiter (default: comma).
    #[arg(long, value_name = "DELIM", value_parser = parse_delimiter)]
    pub attributes_delimiter: Option<u8>,

    /// Write population_clean.csv and customers_clean.csv here.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Append the missingness plots to human output.
    #[arg(long)]
    pub plot: bool,

    /// Plot width in characters (default: 100).
    #[arg(
        long,
        value_name = "INT",
        default_value_t = PlotSize::BARS.width,
        value_parser = parse_positive
    )]
    pub plot_width: usize,

    /// Plot height in lines (default: 70 for bars, 60 for the histogram).
    #[arg(long, value_name = "INT", value_parser = parse_positive)]
    pub plot_height: Option<usize>,

    /// Only plot columns missing more than this percentage (default: 0).
    #[arg(
        long,
        value_name = "FLOAT",
        default_value_t = DEFAULT_PLOT_MIN_PERCENTAGE,
        value_parser = parse_percentage
    )]
    pub plot_min_percentage: f64,

    /// Histogram bins (default: 30).
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_BINS, value_parser = parse_positive)]
    pub bins: usize,

    /// Emit JSON output (single object).
    #[arg(long)]
    pub json: bool,

    /// Log per-attribute replacements.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn clean_config(&self) -> CleanConfig {
        let fix_columns = if self.fix_columns.is_empty() {
            DEFAULT_FIX_COLUMNS.iter().map(|name| name.to_string()).collect()
        } else {
            self.fix_columns.clone()
        };
        CleanConfig {
            column_miss_perc: self.column_miss_perc,
            row_miss_count: self.row_miss_count,
            fix_columns,
            verbose: self.verbose,
        }
    }

    pub fn bars_size(&self) -> PlotSize {
        PlotSize {
            width: self.plot_width,
            height: self.plot_height.unwrap_or(PlotSize::BARS.height),
        }
    }

    pub fn histogram_size(&self) -> PlotSize {
        PlotSize {
            width: self.plot_width,
            height: self.plot_height.unwrap_or(PlotSize::HISTOGRAM.height),
        }
    }

    pub fn dataset_delimiter(&self) -> u8 {
        self.delimiter.unwrap_or(b',')
    }

    pub fn attributes_delimiter(&self) -> u8 {
        self.attributes_delimiter.unwrap_or(b',')
    }
}

fn parse_percentage(raw: &str) -> Result<f64, String> {
    let value = parse_finite(raw, "percentage")?;
    if !(0.0..=100.0).contains(&value) {
        return Err("percentage must be 0 <= x <= 100".to_string());
    }
    Ok(value)
}

fn parse_positive(raw: &str) -> Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| "value must be a non-negative integer".to_string())?;
    if value == 0 {
        return Err("value must be > 0".to_string());
    }
    Ok(value)
}

fn parse_finite(raw: &str, label: &str) -> Result<f64, String> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| format!("{label} must be a valid number"))?;
    if !value.is_finite() {
        return Err(format!("{label} must be a finite number"));
    }
    Ok(value)
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    parse_delimiter_arg(raw).map_err(|err| err.to_string())
}
