// Missingness-by-column bar chart, one panel per dataset.

use crate::clean::report::{MissingEntry, MissingReport};
use crate::format::numbers::format_percentage;
use crate::plot::{PlotSize, fit_label, scaled_bar};

const TITLE: &str = "Missing Data percentages";
// " |" + "| " + "100.0%"
const BAR_CHROME: usize = 10;

/// Two panels ("Population", "Customers") listing the columns whose missing
/// percentage is above `percentage`, in report order.
pub fn plot_percentage_missing(
    population: &MissingReport,
    customers: &MissingReport,
    percentage: f64,
    size: PlotSize,
) -> String {
    let mut lines = vec![TITLE.to_string()];
    lines.extend(render_panel("Population", population, percentage, size));
    lines.extend(render_panel("Customers", customers, percentage, size));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_panel(
    title: &str,
    report: &MissingReport,
    percentage: f64,
    size: PlotSize,
) -> Vec<String> {
    let entries: Vec<&MissingEntry> = report.above(percentage).collect();
    let mut lines = vec![String::new(), format!("== {title} ==")];
    if entries.is_empty() {
        lines.push(format!("(no columns above {})", format_percentage(percentage)));
        return lines;
    }

    let longest = entries
        .iter()
        .map(|entry| entry.attribute.chars().count())
        .max()
        .unwrap_or(0);
    let label_width = longest.min(size.width / 3).max(1);
    let bar_width = size.width.saturating_sub(label_width + BAR_CHROME).max(1);

    let shown = if entries.len() > size.height {
        size.height.saturating_sub(1)
    } else {
        entries.len()
    };
    for entry in &entries[..shown] {
        lines.push(format!(
            "{:<label_width$} |{:<bar_width$}| {:>6}",
            fit_label(&entry.attribute, label_width),
            scaled_bar(entry.missing_percentage, 100.0, bar_width, '#'),
            format_percentage(entry.missing_percentage),
        ));
    }
    if shown < entries.len() {
        lines.push(format!("... {} more", entries.len() - shown));
    }
    lines
}
