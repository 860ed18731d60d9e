//! Pipeline orchestration: load → clean → write → render.

use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::clean::{CleanConfig, CleanOutput, clean_data};
use crate::cli::args::Args;
use crate::cli::exit::Outcome;
use crate::csv::reader::{RawTable, read_table};
use crate::csv::writer::write_dataset;
use crate::metadata::AttributeTable;
use crate::output::human::header::{Inputs, Settings as HumanSettings, render_header};
use crate::output::human::refusal::render_refusal_body;
use crate::output::human::summary::{Written, render_summary_body};
use crate::output::json::{
    Files, JsonOutput, Outputs, Plots, Settings as JsonSettings, render_json,
};
use crate::plot::{plot_missing_rowwise_histogram, plot_percentage_missing};
use crate::refusal::{InputFile, Refusal};
use crate::table::Dataset;

pub const POPULATION_OUTPUT: &str = "population_clean.csv";
pub const CUSTOMERS_OUTPUT: &str = "customers_clean.csv";

pub struct PipelineResult {
    pub outcome: Outcome,
    pub output: String,
}

struct Cleaned {
    output: CleanOutput,
    written: Option<(PathBuf, PathBuf)>,
}

pub fn run(args: &Args) -> Result<PipelineResult, Box<dyn Error>> {
    let config = args.clean_config();
    match clean_files(args, &config) {
        Ok(cleaned) => Ok(render_cleaned(args, &config, &cleaned)?),
        Err(refusal) => Ok(render_refusal(&refusal, args, &config)?),
    }
}

fn clean_files(args: &Args, config: &CleanConfig) -> Result<Cleaned, Refusal> {
    let delimiter = args.dataset_delimiter();
    let population = load_dataset(&args.population, InputFile::Population, delimiter)?;
    let customers = load_dataset(&args.customers, InputFile::Customers, delimiter)?;
    let attributes = load_attributes(&args.attributes, args.attributes_delimiter())?;

    let output = clean_data(population, customers, attributes, config)?;

    let written = match &args.out_dir {
        Some(dir) => Some(write_outputs(dir, &output, delimiter)?),
        None => None,
    };
    Ok(Cleaned { output, written })
}

fn read_input(path: &Path, file: InputFile, delimiter: u8) -> Result<RawTable, Refusal> {
    let bytes = fs::read(path).map_err(|err| Refusal::io(path.display().to_string(), &err))?;
    let table =
        read_table(&bytes, delimiter).map_err(|err| Refusal::from_table_error(file, err))?;
    info!(
        file = file.as_str(),
        rows = table.records.len(),
        columns = table.headers.len(),
        "loaded"
    );
    Ok(table)
}

fn load_dataset(path: &Path, file: InputFile, delimiter: u8) -> Result<Dataset, Refusal> {
    let table = read_input(path, file, delimiter)?;
    Ok(Dataset::from_records(table.headers, &table.records))
}

fn load_attributes(path: &Path, delimiter: u8) -> Result<AttributeTable, Refusal> {
    let table = read_input(path, InputFile::Attributes, delimiter)?;
    Ok(AttributeTable::from_raw(&table)?)
}

fn write_outputs(
    dir: &Path,
    output: &CleanOutput,
    delimiter: u8,
) -> Result<(PathBuf, PathBuf), Refusal> {
    fs::create_dir_all(dir).map_err(|err| Refusal::io(dir.display().to_string(), &err))?;
    let population = dir.join(POPULATION_OUTPUT);
    let customers = dir.join(CUSTOMERS_OUTPUT);
    write_csv(&population, &output.population, delimiter)?;
    write_csv(&customers, &output.customers, delimiter)?;
    info!(dir = %dir.display(), "wrote cleaned datasets");
    Ok((population, customers))
}

fn write_csv(path: &Path, dataset: &Dataset, delimiter: u8) -> Result<(), Refusal> {
    let target = path.display().to_string();
    let file = File::create(path).map_err(|err| Refusal::io(&target, &err))?;
    write_dataset(dataset, BufWriter::new(file), delimiter)
        .map_err(|err| Refusal::io(&target, &io::Error::from(err)))
}

fn render_cleaned(
    args: &Args,
    config: &CleanConfig,
    cleaned: &Cleaned,
) -> Result<PipelineResult, serde_json::Error> {
    let plots = args.plot.then(|| render_plots(args, &cleaned.output));
    let written_paths = cleaned.written.as_ref().map(|(population, customers)| {
        (
            population.display().to_string(),
            customers.display().to_string(),
        )
    });

    let output = if args.json {
        let json = JsonOutput::cleaned(
            json_files(args),
            json_settings(config),
            (&cleaned.output.summary).into(),
        )
        .with_outputs(written_paths.map(|(population, customers)| Outputs {
            population,
            customers,
        }))
        .with_plots(plots.map(|(bars, histogram)| Plots {
            percentage_missing: bars,
            missing_rowwise_histogram: histogram,
        }));
        render_json(&json)?
    } else {
        let mut lines = vec![
            "SEGCLEAN".to_string(),
            String::new(),
            "CLEANED".to_string(),
            String::new(),
        ];
        lines.extend(render_human_header(args, config));
        lines.push(String::new());
        let written = written_paths.as_ref().map(|(population, customers)| Written {
            population: population.as_str(),
            customers: customers.as_str(),
        });
        lines.extend(render_summary_body(&cleaned.output.summary, written));
        let mut output = lines.join("\n");
        output.push('\n');
        if let Some((bars, histogram)) = plots {
            output.push('\n');
            output.push_str(&bars);
            output.push('\n');
            output.push_str(&histogram);
        }
        output
    };

    Ok(PipelineResult {
        outcome: Outcome::Cleaned,
        output,
    })
}

fn render_refusal(
    refusal: &Refusal,
    args: &Args,
    config: &CleanConfig,
) -> Result<PipelineResult, serde_json::Error> {
    info!(code = %refusal.code(), "refused");
    let output = if args.json {
        render_json(&JsonOutput::refusal(
            json_files(args),
            json_settings(config),
            refusal.into(),
        ))?
    } else {
        let mut lines = vec![format!("SEGCLEAN ERROR ({})", refusal.code()), String::new()];
        lines.extend(render_human_header(args, config));
        lines.push(String::new());
        lines.extend(render_refusal_body(refusal));
        let mut output = lines.join("\n");
        output.push('\n');
        output
    };
    Ok(PipelineResult {
        outcome: Outcome::Refusal,
        output,
    })
}

fn render_plots(args: &Args, output: &CleanOutput) -> (String, String) {
    let diagnostics = &output.diagnostics;
    let bars = plot_percentage_missing(
        &diagnostics.population_report,
        &diagnostics.customers_report,
        args.plot_min_percentage,
        args.bars_size(),
    );
    let histogram = plot_missing_rowwise_histogram(
        &diagnostics.population_row_missing,
        &diagnostics.customers_row_missing,
        args.bins,
        args.histogram_size(),
    );
    (bars, histogram)
}

fn render_human_header(args: &Args, config: &CleanConfig) -> Vec<String> {
    let population = display_name(&args.population);
    let customers = display_name(&args.customers);
    let attributes = display_name(&args.attributes);
    render_header(
        Inputs {
            population: &population,
            customers: &customers,
            attributes: &attributes,
        },
        HumanSettings {
            column_miss_perc: config.column_miss_perc,
            row_miss_count: config.row_miss_count,
            fix_columns: &config.fix_columns,
            delimiter: args.dataset_delimiter(),
        },
    )
}

fn json_files(args: &Args) -> Files {
    Files {
        population: display_name(&args.population),
        customers: display_name(&args.customers),
        attributes: display_name(&args.attributes),
    }
}

fn json_settings(config: &CleanConfig) -> JsonSettings {
    JsonSettings {
        column_miss_perc: config.column_miss_perc,
        row_miss_count: config.row_miss_count,
        fix_columns: config.fix_columns.clone(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
