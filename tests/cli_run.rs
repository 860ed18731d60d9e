mod helpers;

use std::fs;
use std::path::{Path, PathBuf};

use segclean::cli::args::Args;
use segclean::cli::exit::Outcome;
use segclean::orchestrator::{self, CUSTOMERS_OUTPUT, POPULATION_OUTPUT};
use serde_json::Value;

fn args(population: PathBuf, customers: PathBuf, attributes: PathBuf) -> Args {
    Args {
        population,
        customers,
        attributes,
        column_miss_perc: 30.0,
        row_miss_count: 50,
        fix_columns: Vec::new(),
        delimiter: None,
        attributes_delimiter: None,
        out_dir: None,
        plot: false,
        plot_width: 100,
        plot_height: None,
        plot_min_percentage: 0.0,
        bins: 30,
        json: false,
        verbose: false,
    }
}

fn fixture_args() -> Args {
    args(
        helpers::fixture_path("population.csv"),
        helpers::fixture_path("customers.csv"),
        helpers::fixture_path("attributes.csv"),
    )
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn json(args: &Args) -> Value {
    let result = orchestrator::run(args).expect("run");
    serde_json::from_str(&result.output).expect("valid json")
}

#[test]
fn human_summary_for_fixtures() {
    let result = orchestrator::run(&fixture_args()).expect("run");
    assert_eq!(result.outcome, Outcome::Cleaned);
    let lines: Vec<&str> = result.output.lines().collect();
    assert_eq!(lines[0], "SEGCLEAN");
    assert_eq!(lines[2], "CLEANED");
    assert_eq!(
        lines[4],
        "Inputs: population=population.csv customers=customers.csv attributes=attributes.csv"
    );
    assert!(result.output.contains(
        "Removed columns (5, customers report): AGER_TYP, CAMEO_DEUG_2015, CAMEO_INTL_2015, KBA05_BAUMAX, SEMIO_SOZ"
    ));
    assert!(result.output.contains("Population: 10 rows x 8 columns -> 10 rows x 3 columns"));
    assert!(result.output.contains("Extra customer columns (2): CUSTOMER_GROUP, ONLINE_PURCHASE"));
    assert!(!result.output.contains("Missing Data percentages"));
}

#[test]
fn json_summary_for_fixtures() {
    let mut args = fixture_args();
    args.json = true;
    args.row_miss_count = 1;
    let value = json(&args);
    assert_eq!(value["version"], "segclean.v0");
    assert_eq!(value["outcome"], "CLEANED");
    assert_eq!(value["settings"]["fix_columns"][0], "CAMEO_DEUG_2015");
    assert_eq!(value["summary"]["population"]["removed_rows"], 1);
    assert_eq!(value["summary"]["customers"]["after"]["rows"], 5);
    assert_eq!(value["summary"]["removed_columns"]["reference"], "customers");
    assert!(value["outputs"].is_null());
    assert!(value["refusal"].is_null());
}

#[test]
fn out_dir_receives_cleaned_csvs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_dir = dir.path().join("cleaned");
    let mut args = fixture_args();
    args.out_dir = Some(out_dir.clone());
    args.row_miss_count = 1;

    let result = orchestrator::run(&args).expect("run");
    assert_eq!(result.outcome, Outcome::Cleaned);

    let population = fs::read_to_string(out_dir.join(POPULATION_OUTPUT)).expect("population");
    let lines: Vec<&str> = population.lines().collect();
    assert_eq!(lines[0], "LNR,ANREDE_KZ,ALTER_HH");
    assert_eq!(lines[1], "910215,2,0");
    assert_eq!(lines.len(), 10);

    let customers = fs::read_to_string(out_dir.join(CUSTOMERS_OUTPUT)).expect("customers");
    assert!(customers.starts_with("LNR,ANREDE_KZ,ALTER_HH,CUSTOMER_GROUP,ONLINE_PURCHASE\n"));
    assert!(!customers.contains("9628"));
    assert!(result.output.contains("Wrote: "));
}

#[test]
fn plot_flag_appends_both_plots() {
    let mut args = fixture_args();
    args.plot = true;
    args.plot_min_percentage = 30.0;
    let result = orchestrator::run(&args).expect("run");
    assert!(result.output.contains("Missing Data percentages"));
    assert!(result.output.contains("No. of Rows vs No. of Missing features"));
    assert!(result.output.contains("AGER_TYP"));
}

#[test]
fn missing_input_refuses_with_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut args = fixture_args();
    args.customers = dir.path().join("absent.csv");
    args.json = true;
    let value = json(&args);
    assert_eq!(value["outcome"], "REFUSAL");
    assert_eq!(value["refusal"]["code"], "E_IO");
    assert_eq!(value["refusal"]["next"], "check file paths/permissions and rerun");
}

#[test]
fn metadata_without_meaning_refuses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let attributes = write_file(dir.path(), "values.csv", "Attribute,Value\nAGER_TYP,-1\n");
    let mut args = fixture_args();
    args.attributes = attributes;
    let result = orchestrator::run(&args).expect("run");
    assert_eq!(result.outcome, Outcome::Refusal);
    let lines: Vec<&str> = result.output.lines().collect();
    assert_eq!(lines[0], "SEGCLEAN ERROR (E_METADATA)");
    assert!(result.output.contains("Example: attributes file: no \"Meaning\" column."));
}

#[test]
fn absent_fix_column_refuses() {
    let mut args = fixture_args();
    args.fix_columns = vec!["CAMEO_DEU_2015".to_string()];
    args.json = true;
    let value = json(&args);
    assert_eq!(value["refusal"]["code"], "E_NO_COLUMN");
    assert_eq!(
        value["refusal"]["message"],
        "customers file: no column \"CAMEO_DEU_2015\""
    );
}

#[test]
fn unparseable_residue_refuses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let population = write_file(
        dir.path(),
        "population.csv",
        "LNR,CAMEO_DEUG_2015,CAMEO_INTL_2015\n1,X,XX\n2,4,2A\n",
    );
    let mut args = fixture_args();
    args.population = population;
    args.json = true;
    let value = json(&args);
    assert_eq!(value["refusal"]["code"], "E_UNPARSEABLE");
    assert_eq!(
        value["refusal"]["message"],
        "population file: column CAMEO_INTL_2015 row 2: \"2A\" is not a number"
    );
}

#[test]
fn semicolon_datasets_with_comma_metadata() {
    let dir = tempfile::tempdir().expect("tempdir");
    let population = write_file(
        dir.path(),
        "population.csv",
        "LNR;AGER_TYP;CAMEO_DEUG_2015;CAMEO_INTL_2015\n1;-1;2;13\n2;3;X;XX\n",
    );
    let customers = write_file(
        dir.path(),
        "customers.csv",
        "LNR;AGER_TYP;CAMEO_DEUG_2015;CAMEO_INTL_2015\n3;1;4;22\n",
    );
    let mut args = args(population, customers, helpers::fixture_path("attributes.csv"));
    args.delimiter = Some(b';');
    args.json = true;
    let value = json(&args);
    assert_eq!(value["outcome"], "CLEANED");
    assert_eq!(
        value["summary"]["removed_columns"]["columns"],
        serde_json::json!(["AGER_TYP", "CAMEO_DEUG_2015", "CAMEO_INTL_2015"])
    );
}

#[test]
fn unknown_row_without_attribute_refuses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let attributes = write_file(
        dir.path(),
        "values.csv",
        "Attribute,Value,Meaning\n,-1,unknown\nAGER_TYP,0,unknown\n",
    );
    let mut args = fixture_args();
    args.attributes = attributes;
    args.json = true;
    let value = json(&args);
    assert_eq!(value["outcome"], "REFUSAL");
    assert_eq!(value["refusal"]["code"], "E_METADATA");
    assert_eq!(
        value["refusal"]["message"],
        "attributes file: unknown row 1 has no attribute name"
    );
}
