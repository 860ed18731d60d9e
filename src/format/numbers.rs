// Number formatting for summaries, plots and CSV output.

use std::time::Duration;

/// Format a count with thousands separators.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let first_group = match digits.len() % 3 {
        0 => 3,
        rem => rem,
    };
    for (idx, ch) in digits.chars().enumerate() {
        if idx >= first_group && (idx - first_group) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a float using the shortest round-trippable representation.
pub fn format_float_shortest(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let plain = value.to_string();
    let scientific = format_scientific_short(value);
    if scientific.len() < plain.len() {
        scientific
    } else {
        plain
    }
}

/// Format a 0–100 percentage with one decimal place.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format elapsed wall-clock time in seconds with millisecond precision.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3}s", elapsed.as_secs_f64())
}

fn format_scientific_short(value: f64) -> String {
    let raw = format!("{value:e}");
    let (mantissa, exponent) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return raw,
    };
    let exponent = match exponent.strip_prefix('-') {
        Some(digits) => format!("-{}", trim_leading_zeros(digits)),
        None => trim_leading_zeros(exponent).to_string(),
    };
    format!("{mantissa}e{exponent}")
}

fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_count_with_commas() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(12), "12");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(891221), "891,221");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn formats_float_shortest() {
        assert_eq!(format_float_shortest(8.0), "8");
        assert_eq!(format_float_shortest(1.25), "1.25");
        assert_eq!(format_float_shortest(-1.0), "-1");
        assert_eq!(format_float_shortest(1e-9), "1e-9");
    }

    #[test]
    fn formats_percentage() {
        assert_eq!(format_percentage(30.0), "30.0%");
        assert_eq!(format_percentage(100.0 / 3.0), "33.3%");
    }

    #[test]
    fn formats_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500s");
    }
}
