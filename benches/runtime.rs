// Opt-in runtime harness. Run with: cargo bench --bench runtime
use std::hint::black_box;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use segclean::cli::args::Args;
use segclean::metadata::{AttributeRow, AttributeTable};
use segclean::table::{Cell, Dataset};
use segclean::{CleanConfig, clean_data, orchestrator};

const SYNTHETIC_COLUMNS: usize = 60;

fn main() {
    let iterations = env_u64("SEGCLEAN_RUNTIME_ITERS", 20);
    let warmup = env_u64("SEGCLEAN_RUNTIME_WARMUP", 2);
    let rows = env_u64("SEGCLEAN_RUNTIME_ROWS", 20_000) as usize;
    let budget_ms = env_f64("SEGCLEAN_RUNTIME_BUDGET_MS");

    println!("segclean runtime harness");
    println!("iterations={iterations} warmup={warmup} rows={rows}");
    if let Some(budget) = budget_ms {
        println!("budget_ms={budget}");
    }

    let population = synthetic_dataset(rows, 7);
    let customers = synthetic_dataset(rows / 5, 3);
    let attributes = synthetic_attributes();
    let config = CleanConfig {
        fix_columns: vec!["c0".to_string()],
        ..CleanConfig::default()
    };
    let synthetic = time_case("synthetic_clean_data", iterations, warmup, || {
        let output = clean_data(
            population.clone(),
            customers.clone(),
            attributes.clone(),
            &config,
        )
        .expect("clean_data failed");
        black_box(output);
    });

    let args = fixture_args();
    let fixtures = time_case("fixtures_cli_run", iterations, warmup, || {
        let result = orchestrator::run(&args).expect("run failed");
        black_box(result);
    });

    let failed = budget_ms.is_some_and(|budget| {
        [("synthetic_clean_data", synthetic), ("fixtures_cli_run", fixtures)]
            .iter()
            .filter(|(_, avg_ms)| *avg_ms > budget)
            .inspect(|(name, avg_ms)| {
                eprintln!("budget exceeded for {name}: avg_ms={avg_ms:.3} budget_ms={budget:.3}")
            })
            .count()
            > 0
    });
    if failed {
        std::process::exit(1);
    }
}

fn time_case(name: &str, iterations: u64, warmup: u64, mut case: impl FnMut()) -> f64 {
    for _ in 0..warmup {
        case();
    }

    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        case();
        total += start.elapsed();
    }

    let total_ms = total.as_secs_f64() * 1000.0;
    let avg_ms = if iterations == 0 {
        0.0
    } else {
        total_ms / iterations as f64
    };
    println!("case {name}: avg_ms={avg_ms:.3} total_ms={total_ms:.3}");
    avg_ms
}

/// Integer codes in -1..=9, every `stride`-th cell missing, column `c0`
/// carrying `X` sentinels.
fn synthetic_dataset(rows: usize, stride: usize) -> Dataset {
    let headers = (0..SYNTHETIC_COLUMNS).map(|idx| format!("c{idx}")).collect();
    let cells = (0..rows).map(|row| {
        (0..SYNTHETIC_COLUMNS)
            .map(|col| {
                let seed = row * 31 + col * 17;
                match (col, seed % stride) {
                    (0, 0) => Cell::Text("X".to_string()),
                    (_, 0) => Cell::Missing,
                    _ => Cell::Int((seed % 11) as i64 - 1),
                }
            })
            .collect()
    });
    Dataset::from_rows(headers, cells)
}

fn synthetic_attributes() -> AttributeTable {
    let rows = (1..SYNTHETIC_COLUMNS)
        .map(|col| {
            let name = format!("c{col}");
            AttributeRow::new(Some(name.as_str()), "unknown", "-1,0")
        })
        .collect();
    AttributeTable::new(rows)
}

fn fixture_args() -> Args {
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    Args {
        population: fixtures.join("population.csv"),
        customers: fixtures.join("customers.csv"),
        attributes: fixtures.join("attributes.csv"),
        column_miss_perc: 30.0,
        row_miss_count: 50,
        fix_columns: Vec::new(),
        delimiter: None,
        attributes_delimiter: None,
        out_dir: None,
        plot: true,
        plot_width: 100,
        plot_height: None,
        plot_min_percentage: 0.0,
        bins: 30,
        json: false,
        verbose: false,
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| *value > 0.0)
}
