//! Column pruning by missingness percentage.

use std::cmp::Ordering;

use tracing::info;

use crate::clean::report::MissingReport;
use crate::table::Dataset;

/// Which report supplied the removal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChoice {
    First,
    Second,
}

impl ReportChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportChoice::First => "first",
            ReportChoice::Second => "second",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRemoval {
    /// Columns dropped from both datasets, in reference-report order.
    pub columns: Vec<String>,
    pub reference: ReportChoice,
}

/// Pick the removal list: more flagged columns wins, a tie goes to the
/// second report.
pub fn choose_reference(first: &[String], second: &[String]) -> ReportChoice {
    match first.len().cmp(&second.len()) {
        Ordering::Greater => ReportChoice::First,
        Ordering::Less | Ordering::Equal => ReportChoice::Second,
    }
}

/// Drop columns whose missingness exceeds `threshold` (strict) from both
/// datasets, using the report that flags more columns as the reference.
/// Listed columns a dataset does not have are ignored.
pub fn remove_missing_columns(
    first: &mut Dataset,
    second: &mut Dataset,
    first_report: &MissingReport,
    second_report: &MissingReport,
    threshold: f64,
) -> ColumnRemoval {
    let first_flagged = first_report.attributes_above(threshold);
    let second_flagged = second_report.attributes_above(threshold);

    let reference = choose_reference(&first_flagged, &second_flagged);
    let columns = match reference {
        ReportChoice::First => first_flagged,
        ReportChoice::Second => second_flagged,
    };

    first.drop_columns(&columns);
    second.drop_columns(&columns);
    info!(
        removed = columns.len(),
        reference = reference.as_str(),
        "removed columns from given datasets"
    );

    ColumnRemoval { columns, reference }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::report::{MissingEntry, missing_report};
    use crate::table::Cell;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn report(entries: &[(&str, f64)]) -> MissingReport {
        MissingReport::new(
            entries
                .iter()
                .map(|(attribute, missing_percentage)| MissingEntry {
                    attribute: attribute.to_string(),
                    missing_percentage: *missing_percentage,
                })
                .collect(),
        )
    }

    fn wide(columns: &[&str]) -> Dataset {
        Dataset::from_rows(names(columns), vec![vec![Cell::Int(1); columns.len()]])
    }

    #[test]
    fn larger_set_wins_and_tie_goes_second() {
        assert_eq!(choose_reference(&names(&["a", "b"]), &names(&["c"])), ReportChoice::First);
        assert_eq!(choose_reference(&names(&["a"]), &names(&["b", "c"])), ReportChoice::Second);
        assert_eq!(choose_reference(&names(&["a"]), &names(&["b"])), ReportChoice::Second);
        assert_eq!(choose_reference(&[], &[]), ReportChoice::Second);
    }

    #[test]
    fn larger_report_drives_removal_from_both() {
        let all = ["c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10"];
        let mut first = wide(&all);
        let mut second = wide(&all[..9]);
        let first_report = report(&[
            ("c1", 40.0),
            ("c2", 40.0),
            ("c3", 40.0),
            ("c4", 40.0),
            ("c5", 40.0),
            ("c9", 10.0),
        ]);
        let second_report = report(&[
            ("c1", 31.0),
            ("c2", 31.0),
            ("c3", 31.0),
            ("c4", 31.0),
            ("c6", 31.0),
            ("c7", 31.0),
            ("c8", 31.0),
            ("c10", 99.0),
            ("c9", 30.0),
        ]);

        let removal = remove_missing_columns(
            &mut first,
            &mut second,
            &first_report,
            &second_report,
            30.0,
        );
        assert_eq!(removal.reference, ReportChoice::Second);
        assert_eq!(
            removal.columns,
            names(&["c1", "c2", "c3", "c4", "c6", "c7", "c8", "c10"])
        );
        assert_eq!(first.column_names().collect::<Vec<_>>(), vec!["c5", "c9"]);
        assert_eq!(second.column_names().collect::<Vec<_>>(), vec!["c5", "c9"]);
    }

    #[test]
    fn no_reference_column_survives_above_threshold() {
        let mut first = Dataset::from_rows(
            names(&["LNR", "AGER_TYP", "ALTER_HH"]),
            vec![
                vec![Cell::Int(1), Cell::Missing, Cell::Int(0)],
                vec![Cell::Int(2), Cell::Missing, Cell::Missing],
                vec![Cell::Int(3), Cell::Int(2), Cell::Int(9)],
            ],
        );
        let mut second = first.clone();
        let first_report = missing_report(&first);
        let second_report = missing_report(&second);

        let removal = remove_missing_columns(
            &mut first,
            &mut second,
            &first_report,
            &second_report,
            30.0,
        );
        assert_eq!(removal.columns, names(&["AGER_TYP", "ALTER_HH"]));
        for entry in missing_report(&first).entries() {
            assert!(entry.missing_percentage <= 30.0);
        }
    }
}
