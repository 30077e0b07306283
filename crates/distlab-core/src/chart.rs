//! Chart-ready series
//!
//! Any bar chart that accepts an ordered list of `{category, value}` points
//! can draw these. `render_bars` draws them as plain text.

use serde::{Deserialize, Serialize};

use distlab_stats::{ContinuousSummary, DiscreteTable};

/// One bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub category: String,
    pub value: f64,
}

/// A named, ordered list of bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, category: impl Into<String>, value: f64) {
        self.points.push(ChartPoint {
            category: category.into(),
            value,
        });
    }

    /// Largest value, or 0 for an empty series
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Count per discrete row, keyed by row label
pub fn count_series(table: &DiscreteTable) -> ChartSeries {
    let mut series = ChartSeries::new("Count");
    for row in &table.rows {
        series.push(row.label.clone(), row.count as f64);
    }
    series
}

/// Probability per discrete row, keyed by row label
pub fn probability_series(table: &DiscreteTable) -> ChartSeries {
    let mut series = ChartSeries::new("Probability");
    for row in &table.rows {
        series.push(row.label.clone(), row.probability);
    }
    series
}

/// Frequency per histogram bin, keyed by bin label
pub fn histogram_series(summary: &ContinuousSummary) -> ChartSeries {
    let mut series = ChartSeries::new("Frequency");
    for bin in &summary.bins {
        series.push(bin.label.clone(), bin.count as f64);
    }
    series
}

/// Draw a series as horizontal text bars scaled to the largest value
///
/// Any positive value gets at least one block so it stays visible.
pub fn render_bars(series: &ChartSeries, bar_width: usize, decimals: usize) -> String {
    let label_width = series
        .points
        .iter()
        .map(|p| p.category.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.max_value();

    let mut out = String::new();
    for point in &series.points {
        let ratio = if max > 0.0 { point.value / max } else { 0.0 };
        let mut filled = (ratio * bar_width as f64).round() as usize;
        if point.value > 0.0 {
            filled = filled.clamp(1, bar_width);
        }

        out.push_str(&format!(
            "{:<label_width$} | {}{} {:.*}\n",
            point.category,
            "█".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled)),
            decimals,
            point.value,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use distlab_stats::{continuous, discrete, ContinuousRecord, DiscreteRecord};

    fn pens() -> DiscreteTable {
        discrete::summarize(&[
            DiscreteRecord::new("Pen (Blue)", 3),
            DiscreteRecord::new("Pen (Red)", 1),
        ])
    }

    #[test]
    fn test_discrete_series() {
        let table = pens();

        let counts = count_series(&table);
        assert_eq!(counts.name, "Count");
        assert_eq!(counts.points[0].category, "Pen (Blue)");
        assert_eq!(counts.points[0].value, 3.0);

        let probabilities = probability_series(&table);
        assert_eq!(probabilities.points[1].value, 0.25);
    }

    #[test]
    fn test_histogram_series() {
        let records: Vec<ContinuousRecord> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .iter()
            .map(|&v| ContinuousRecord::new("x", v))
            .collect();
        let series = histogram_series(&continuous::summarize(&records));

        assert_eq!(series.points.len(), 5);
        assert_eq!(series.points[0].category, "1.0-1.8");
        assert!(series.points.iter().all(|p| p.value == 1.0));
    }

    #[test]
    fn test_render_bars() {
        let text = render_bars(&count_series(&pens()), 6, 0);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Pen (Blue) | ██████ 3");
        assert_eq!(lines[1], "Pen (Red)  | ██     1");
    }

    #[test]
    fn test_render_bars_all_zero() {
        let table = discrete::summarize(&[DiscreteRecord::new("Pen (Blue)", 0)]);
        let text = render_bars(&count_series(&table), 4, 0);
        assert_eq!(text, "Pen (Blue) |      0\n");
    }

    #[test]
    fn test_small_value_still_visible() {
        let mut series = ChartSeries::new("Count");
        series.push("a", 1000.0);
        series.push("b", 1.0);
        let text = render_bars(&series, 10, 0);
        assert!(text.lines().nth(1).unwrap().contains('█'));
    }
}
