//! distlab-core - Workbench state for a distribution teaching tool
//!
//! This crate owns everything the statistics engines deliberately do not:
//!
//! - **Sheets**: editable, ordered rows keyed by locally allocated ids
//! - **Input**: coercion of raw text into counts and measurements
//! - **Charts**: `{category, value}` series ready for any bar chart
//! - **Reports**: display formatting and the normal-distribution rules
//! - **Workbench**: both sheets plus config, with serializable snapshots
//!
//! Every snapshot is recomputed from scratch by calling the engines in
//! `distlab-stats`; nothing is cached between edits.

pub mod chart;
pub mod config;
pub mod continuous;
pub mod discrete;
pub mod error;
pub mod input;
pub mod report;
pub mod table;
pub mod workbench;

pub use chart::{ChartPoint, ChartSeries};
pub use config::{DisplayConfig, SeedConfig, WorkbenchConfig};
pub use continuous::{ContinuousSheet, Measurement};
pub use discrete::{DiscreteSheet, ObjectCount};
pub use error::*;
pub use table::{RecordId, RecordTable, Row};
pub use workbench::*;
