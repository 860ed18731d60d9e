// JSON output schema assembly.

use serde::Serialize;

use crate::clean::{CleanSummary, DatasetSummary, Shape};
use crate::refusal::Refusal as PipelineRefusal;

pub const SCHEMA_VERSION: &str = "segclean.v0";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Cleaned,
    Refusal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Files {
    pub population: String,
    pub customers: String,
    pub attributes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub column_miss_perc: f64,
    pub row_miss_count: usize,
    pub fix_columns: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShapeJson {
    pub rows: usize,
    pub columns: usize,
}

impl From<Shape> for ShapeJson {
    fn from(shape: Shape) -> Self {
        Self {
            rows: shape.rows,
            columns: shape.columns,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetCounts {
    pub before: ShapeJson,
    pub after: ShapeJson,
    pub fixed: bool,
    pub resolved_attributes: usize,
    pub replaced_cells: usize,
    pub removed_rows: usize,
}

impl From<&DatasetSummary> for DatasetCounts {
    fn from(dataset: &DatasetSummary) -> Self {
        Self {
            before: dataset.before.into(),
            after: dataset.after.into(),
            fixed: dataset.fixed,
            resolved_attributes: dataset.resolved.attributes,
            replaced_cells: dataset.resolved.cells,
            removed_rows: dataset.removed_rows,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovedColumns {
    /// Dataset whose report supplied the list.
    pub reference: &'static str,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub population: DatasetCounts,
    pub customers: DatasetCounts,
    pub extra_customer_columns: Vec<String>,
    pub removed_columns: RemovedColumns,
    pub elapsed_seconds: f64,
}

impl From<&CleanSummary> for Summary {
    fn from(summary: &CleanSummary) -> Self {
        Self {
            population: (&summary.population).into(),
            customers: (&summary.customers).into(),
            extra_customer_columns: summary.extra_customer_columns.clone(),
            removed_columns: RemovedColumns {
                reference: summary.reference_file().as_str(),
                columns: summary.removed_columns.columns.clone(),
            },
            elapsed_seconds: summary.elapsed.as_secs_f64(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Outputs {
    pub population: String,
    pub customers: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plots {
    pub percentage_missing: String,
    pub missing_rowwise_histogram: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Refusal {
    pub code: String,
    pub message: String,
    pub next: String,
}

impl From<&PipelineRefusal> for Refusal {
    fn from(refusal: &PipelineRefusal) -> Self {
        Self {
            code: refusal.code().as_str().to_string(),
            message: refusal.kind.message(),
            next: refusal.next.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub outcome: Outcome,
    pub files: Files,
    pub settings: Settings,
    pub summary: Option<Summary>,
    pub outputs: Option<Outputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plots: Option<Plots>,
    pub refusal: Option<Refusal>,
}

impl JsonOutput {
    pub fn cleaned(files: Files, settings: Settings, summary: Summary) -> Self {
        Self {
            version: SCHEMA_VERSION,
            outcome: Outcome::Cleaned,
            files,
            settings,
            summary: Some(summary),
            outputs: None,
            plots: None,
            refusal: None,
        }
    }

    pub fn refusal(files: Files, settings: Settings, refusal: Refusal) -> Self {
        Self {
            version: SCHEMA_VERSION,
            outcome: Outcome::Refusal,
            files,
            settings,
            summary: None,
            outputs: None,
            plots: None,
            refusal: Some(refusal),
        }
    }

    pub fn with_outputs(mut self, outputs: Option<Outputs>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_plots(mut self, plots: Option<Plots>) -> Self {
        self.plots = plots;
        self
    }
}

pub fn render_json(output: &JsonOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string(output)
}
