// Human output header lines shared by every outcome.

use crate::format::numbers::{format_count, format_percentage};

#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    pub population: &'a str,
    pub customers: &'a str,
    pub attributes: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct Settings<'a> {
    pub column_miss_perc: f64,
    pub row_miss_count: usize,
    pub fix_columns: &'a [String],
    pub delimiter: u8,
}

pub fn render_header(inputs: Inputs<'_>, settings: Settings<'_>) -> Vec<String> {
    vec![
        format!(
            "Inputs: population={} customers={} attributes={}",
            inputs.population, inputs.customers, inputs.attributes
        ),
        format!(
            "Settings: column_miss_perc={} row_miss_count={} delimiter={}",
            format_percentage(settings.column_miss_perc),
            format_count(settings.row_miss_count),
            format_delimiter(settings.delimiter)
        ),
        format!("Fix columns: {}", render_names(settings.fix_columns)),
    ]
}

/// Comma-separated names, or "none".
pub fn render_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn format_delimiter(delimiter: u8) -> String {
    if delimiter == b'\t' {
        return "TAB".to_string();
    }
    if (0x21..=0x7e).contains(&delimiter) {
        return (delimiter as char).to_string();
    }
    format!("0x{delimiter:02X}")
}
