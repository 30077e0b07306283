//! Display text for summaries
//!
//! Formatting is kept out of the engines: they return raw numbers and the
//! presentation layer decides precision and units here.

use serde::Serialize;

use distlab_stats::{ContinuousSummary, SigmaRange};

use crate::config::DisplayConfig;

/// Short explanation of a distribution kind
#[derive(Debug, Clone, Serialize)]
pub struct Definition {
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// Descriptions of the two distribution kinds the workbench covers
pub fn definitions() -> Vec<Definition> {
    vec![
        Definition {
            title: "Discrete Probability Distribution",
            description: "A discrete probability distribution describes the probability of each \
                possible value for a random variable that can only take on certain distinct values.",
            examples: &[
                "Number of heads when flipping coins",
                "Count of objects of different colors",
                "Number of students in different grade levels",
            ],
        },
        Definition {
            title: "Continuous Probability Distribution",
            description: "A continuous probability distribution describes the probability of a \
                random variable that can take any value within a given range.",
            examples: &[
                "Heights of people",
                "Time to complete a task",
                "Temperature measurements",
            ],
        },
    ]
}

/// Probability with a fixed number of decimals, e.g. `0.7500`
pub fn format_probability(probability: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, probability)
}

/// Statistic with the configured decimals and unit, e.g. `172.50 cm`
pub fn format_statistic(value: f64, display: &DisplayConfig) -> String {
    format!(
        "{:.*}{}",
        display.statistic_decimals,
        value,
        unit_suffix(display)
    )
}

/// `0.68` as `68%`, `0.997` as `99.7%`
pub fn coverage_percent(coverage: f64) -> String {
    let percent = coverage * 100.0;
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{:.0}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}

/// One line of the 68-95-99.7 rule for a sigma range
pub fn normal_rule(range: &SigmaRange, display: &DisplayConfig) -> String {
    let noun = if range.sigmas == 1 {
        "standard deviation"
    } else {
        "standard deviations"
    };
    let decimals = display.statistic_decimals;

    format!(
        "{} of data falls within {} {} of the mean ({:.*} to {:.*}{})",
        coverage_percent(range.coverage),
        range.sigmas,
        noun,
        decimals,
        range.lower,
        decimals,
        range.upper,
        unit_suffix(display)
    )
}

/// The 68-95-99.7 rule lines for a summary
pub fn normal_rules(summary: &ContinuousSummary, display: &DisplayConfig) -> Vec<String> {
    summary
        .sigma_ranges()
        .iter()
        .map(|range| normal_rule(range, display))
        .collect()
}

fn unit_suffix(display: &DisplayConfig) -> String {
    if display.unit.is_empty() {
        String::new()
    } else {
        format!(" {}", display.unit)
    }
}
