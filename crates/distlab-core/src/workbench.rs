//! The workbench: both sheets, their config, and derived snapshots
//!
//! A snapshot is a plain function of the current rows. Callers mutate a
//! sheet, then take a new snapshot; there is no cached or incremental state.

use serde::Serialize;

use distlab_stats::{Bin, SigmaRange};

use crate::chart::{self, ChartSeries};
use crate::config::WorkbenchConfig;
use crate::continuous::{ContinuousSheet, Measurement};
use crate::discrete::{DiscreteSheet, ObjectCount};
use crate::error::WorkbenchResult;
use crate::report;
use crate::table::RecordId;

/// Editable discrete and continuous datasets
#[derive(Debug, Clone)]
pub struct Workbench {
    config: WorkbenchConfig,
    discrete: DiscreteSheet,
    continuous: ContinuousSheet,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::seeded(WorkbenchConfig::default())
    }
}

impl Workbench {
    /// Create a workbench seeded with the config's initial rows
    pub fn new(config: WorkbenchConfig) -> WorkbenchResult<Self> {
        config.validate()?;
        Ok(Self::seeded(config))
    }

    fn seeded(config: WorkbenchConfig) -> Self {
        let discrete = DiscreteSheet::with_rows(config.seed.discrete.iter().cloned());
        let continuous = ContinuousSheet::with_rows(config.seed.continuous.iter().cloned());
        tracing::info!(
            "Workbench created with {} discrete and {} continuous rows",
            discrete.len(),
            continuous.len()
        );

        Self {
            config,
            discrete,
            continuous,
        }
    }

    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    pub fn discrete(&self) -> &DiscreteSheet {
        &self.discrete
    }

    pub fn discrete_mut(&mut self) -> &mut DiscreteSheet {
        &mut self.discrete
    }

    pub fn continuous(&self) -> &ContinuousSheet {
        &self.continuous
    }

    pub fn continuous_mut(&mut self) -> &mut ContinuousSheet {
        &mut self.continuous
    }

    /// Everything a presentation layer shows, derived from the current rows
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            discrete: self.discrete_view(),
            continuous: self.continuous_view(),
        }
    }

    pub fn discrete_view(&self) -> DiscreteView {
        let table = self.discrete.summary();
        let decimals = self.config.display.probability_decimals;

        // The engine keeps input order, so summary rows line up with sheet rows
        let rows = self
            .discrete
            .rows()
            .iter()
            .zip(&table.rows)
            .map(|(row, summary)| DiscreteRowView {
                id: row.id,
                input: row.record.clone(),
                label: summary.label.clone(),
                count: summary.count,
                probability: summary.probability,
                probability_display: report::format_probability(summary.probability, decimals),
            })
            .collect();

        DiscreteView {
            rows,
            total_count: table.total_count,
            count_chart: chart::count_series(&table),
            probability_chart: chart::probability_series(&table),
        }
    }

    pub fn continuous_view(&self) -> ContinuousView {
        let summary = self.continuous.summary();
        let display = &self.config.display;

        ContinuousView {
            rows: self
                .continuous
                .rows()
                .iter()
                .map(|row| MeasurementRowView {
                    id: row.id,
                    input: row.record.clone(),
                })
                .collect(),
            count: summary.count,
            mean: summary.mean,
            std_dev: summary.std_dev,
            mean_display: report::format_statistic(summary.mean, display),
            std_dev_display: report::format_statistic(summary.std_dev, display),
            sigma_ranges: summary.sigma_ranges(),
            normal_rules: report::normal_rules(&summary, display),
            histogram_chart: chart::histogram_series(&summary),
            bins: summary.bins,
        }
    }
}

/// Derived view of both sheets
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub discrete: DiscreteView,
    pub continuous: ContinuousView,
}

/// One discrete row with its derived probability
#[derive(Debug, Clone, Serialize)]
pub struct DiscreteRowView {
    pub id: RecordId,
    pub input: ObjectCount,
    pub label: String,
    pub count: u32,
    pub probability: f64,
    pub probability_display: String,
}

/// Frequency table and charts for the discrete sheet
#[derive(Debug, Clone, Serialize)]
pub struct DiscreteView {
    pub rows: Vec<DiscreteRowView>,
    pub total_count: u64,
    pub count_chart: ChartSeries,
    pub probability_chart: ChartSeries,
}

/// One measurement row as entered
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementRowView {
    pub id: RecordId,
    pub input: Measurement,
}

/// Statistics, histogram and rule text for the continuous sheet
#[derive(Debug, Clone, Serialize)]
pub struct ContinuousView {
    pub rows: Vec<MeasurementRowView>,
    pub count: u64,
    pub mean: f64,
    pub std_dev: f64,
    pub mean_display: String,
    pub std_dev_display: String,
    pub sigma_ranges: Vec<SigmaRange>,
    pub normal_rules: Vec<String>,
    pub bins: Vec<Bin>,
    pub histogram_chart: ChartSeries,
}
