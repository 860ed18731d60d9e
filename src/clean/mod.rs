//! Missing-data remediation steps, in pipeline order.

pub mod columns;
pub mod fix;
pub mod pipeline;
pub mod report;
pub mod rows;
pub mod unknowns;

pub use columns::{ColumnRemoval, ReportChoice, remove_missing_columns};
pub use fix::{DEFAULT_FIX_COLUMNS, FixError, fix_columns, is_float_typed};
pub use pipeline::{
    CleanConfig, CleanOutput, CleanSummary, DatasetSummary, Diagnostics, Shape, clean_data,
};
pub use report::{MissingEntry, MissingReport, missing_report};
pub use rows::remove_missing_rows;
pub use unknowns::{ResolveStats, UnknownCodeError, replace_unknowns, unknown_codes};
