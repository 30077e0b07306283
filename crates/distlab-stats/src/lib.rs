//! distlab-stats - Statistics engines for distribution teaching tools
//!
//! Two independent, pure engines:
//!
//! - **Discrete**: labeled counts to relative frequencies and a total
//! - **Continuous**: measurements to mean, population standard deviation,
//!   and a fixed five-bin histogram
//!
//! # Design Philosophy
//!
//! Both engines are plain functions of their input slice. They never mutate
//! the input, keep no state between calls, and guard every division so that
//! degenerate input (empty lists, zero totals, identical values) yields
//! defined fallback values instead of NaN or infinity. Callers re-run them
//! after every edit to their record lists.

pub mod continuous;
pub mod discrete;

pub use continuous::{
    histogram, mean, population_std_dev, Bin, ContinuousRecord, ContinuousSummary, SigmaRange,
    BIN_COUNT,
};
pub use discrete::{relative_frequency, DiscreteRecord, DiscreteSummary, DiscreteTable};

/// Summarize labeled counts (see [`discrete::summarize`])
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn summarize_discrete(records: Vec<DiscreteRecord>) -> DiscreteTable {
    discrete::summarize(&records)
}

/// Summarize measurements (see [`continuous::summarize`])
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn summarize_continuous(records: Vec<ContinuousRecord>) -> ContinuousSummary {
    continuous::summarize(&records)
}

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
