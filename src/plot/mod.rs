//! Text diagnostics: missingness by column and by row.
//!
//! Both charts render to a `String` sized by [`PlotSize`] (characters per
//! line, lines per panel). Callers decide where to write it.

pub mod bars;
pub mod histogram;

pub use bars::plot_percentage_missing;
pub use histogram::plot_missing_rowwise_histogram;

/// Display size in characters (width) and lines (height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSize {
    pub width: usize,
    pub height: usize,
}

impl PlotSize {
    pub const BARS: PlotSize = PlotSize {
        width: 100,
        height: 70,
    };
    pub const HISTOGRAM: PlotSize = PlotSize {
        width: 100,
        height: 60,
    };
}

pub const DEFAULT_BINS: usize = 30;

/// Bar of `fill` characters scaled from `value / max` over `width` cells.
pub(crate) fn scaled_bar(value: f64, max: f64, width: usize, fill: char) -> String {
    if max <= 0.0 || width == 0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    std::iter::repeat_n(fill, cells.min(width)).collect()
}

/// Cut a label to at most `width` characters.
pub(crate) fn fit_label(label: &str, width: usize) -> String {
    label.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_and_clamp() {
        assert_eq!(scaled_bar(50.0, 100.0, 10, '#'), "#####");
        assert_eq!(scaled_bar(100.0, 100.0, 4, '#'), "####");
        assert_eq!(scaled_bar(0.0, 100.0, 4, '#'), "");
        assert_eq!(scaled_bar(3.0, 0.0, 4, '#'), "");
    }

    #[test]
    fn labels_are_cut_by_chars() {
        assert_eq!(fit_label("CAMEO_DEUG_2015", 5), "CAMEO");
        assert_eq!(fit_label("LNR", 5), "LNR");
    }
}
