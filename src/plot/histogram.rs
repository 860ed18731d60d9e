// Missing-features-per-row histogram, both datasets over shared bins.

use crate::plot::{PlotSize, scaled_bar};

const TITLE: &str = "No. of Rows vs No. of Missing features";
const POPULATION_FILL: char = '#';
const CUSTOMERS_FILL: char = '+';

/// Integer buckets over `[min, max]` of both series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    pub start: usize,
    pub width: usize,
    pub population: Vec<usize>,
    pub customers: Vec<usize>,
}

impl Buckets {
    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    fn label(&self, index: usize) -> String {
        let lo = self.start + index * self.width;
        if self.width == 1 {
            lo.to_string()
        } else {
            format!("{lo}-{}", lo + self.width - 1)
        }
    }
}

/// Split the shared range into at most `bins` integer-width buckets.
pub fn bucket_counts(population: &[usize], customers: &[usize], bins: usize) -> Buckets {
    let values = population.iter().chain(customers);
    let (Some(lo), Some(hi)) = (values.clone().min().copied(), values.max().copied()) else {
        return Buckets {
            start: 0,
            width: 1,
            population: Vec::new(),
            customers: Vec::new(),
        };
    };
    let span = hi - lo + 1;
    let width = span.div_ceil(bins.max(1));
    let count = span.div_ceil(width);

    let tally = |series: &[usize]| {
        let mut counts = vec![0usize; count];
        for value in series {
            counts[(value - lo) / width] += 1;
        }
        counts
    };
    Buckets {
        start: lo,
        width,
        population: tally(population),
        customers: tally(customers),
    }
}

/// Histogram of per-row missing counts, two bars per bucket.
pub fn plot_missing_rowwise_histogram(
    population: &[usize],
    customers: &[usize],
    bins: usize,
    size: PlotSize,
) -> String {
    let buckets = bucket_counts(population, customers, bins);
    let mut lines = vec![
        TITLE.to_string(),
        format!("{POPULATION_FILL} Population  {CUSTOMERS_FILL} Customers"),
        "x: No. of Missing Features, bar: No. of Rows".to_string(),
    ];
    if buckets.is_empty() {
        lines.push("(no rows)".to_string());
        return finish(lines);
    }

    let label_width = (0..buckets.len())
        .map(|index| buckets.label(index).len())
        .max()
        .unwrap_or(1);
    let peak = buckets
        .population
        .iter()
        .chain(&buckets.customers)
        .copied()
        .max()
        .unwrap_or(0);
    let count_width = peak.to_string().len();
    let bar_width = size.width.saturating_sub(label_width + count_width + 3).max(1);

    let fits = size.height / 2;
    let shown = if buckets.len() > fits {
        fits.saturating_sub(1)
    } else {
        buckets.len()
    };
    for index in 0..shown {
        let series = [
            (POPULATION_FILL, buckets.population[index]),
            (CUSTOMERS_FILL, buckets.customers[index]),
        ];
        for (line, (fill, count)) in series.into_iter().enumerate() {
            let label = if line == 0 { buckets.label(index) } else { String::new() };
            let bar = scaled_bar(count as f64, peak as f64, bar_width, fill);
            lines.push(format!("{label:>label_width$} |{bar} {count}"));
        }
    }
    if shown < buckets.len() {
        lines.push(format!("... {} more bins", buckets.len() - shown));
    }
    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
