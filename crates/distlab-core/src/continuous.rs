//! Continuous sheet: named height measurements

use serde::{Deserialize, Serialize};

use distlab_stats::continuous;
use distlab_stats::{ContinuousRecord, ContinuousSummary};

use crate::error::WorkbenchResult;
use crate::input::coerce_measurement;
use crate::table::{RecordId, RecordTable, Row};

/// One measured object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub object: String,
    pub height: f64,
}

impl Measurement {
    pub fn new(object: impl Into<String>, height: f64) -> Self {
        Self {
            object: object.into(),
            height,
        }
    }

    pub fn to_record(&self) -> ContinuousRecord {
        ContinuousRecord::new(self.object.clone(), self.height)
    }
}

/// Editable list of measurements
#[derive(Debug, Clone, Default)]
pub struct ContinuousSheet {
    rows: RecordTable<Measurement>,
}

impl ContinuousSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = Measurement>) -> Self {
        Self {
            rows: RecordTable::from_records(rows),
        }
    }

    /// Append an unnamed row with height 0
    pub fn add_row(&mut self) -> RecordId {
        self.push(Measurement::default())
    }

    pub fn push(&mut self, row: Measurement) -> RecordId {
        let id = self.rows.push(row);
        tracing::debug!("Added continuous row {}", id);
        id
    }

    pub fn remove_row(&mut self, id: RecordId) -> WorkbenchResult<Measurement> {
        let removed = self.rows.remove(id)?;
        tracing::debug!("Removed continuous row {}", id);
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn set_object(&mut self, id: RecordId, value: &str) -> WorkbenchResult<()> {
        self.rows.update(id, |row| row.object = value.to_string())
    }

    /// Set a height from raw text; returns the coerced value
    pub fn set_height(&mut self, id: RecordId, raw: &str) -> WorkbenchResult<f64> {
        let height = coerce_measurement(raw);
        self.rows.update(id, |row| row.height = height)?;
        tracing::debug!("Set height of continuous row {} to {}", id, height);
        Ok(height)
    }

    pub fn get(&self, id: RecordId) -> Option<&Measurement> {
        self.rows.get(id)
    }

    pub fn rows(&self) -> &[Row<Measurement>] {
        self.rows.rows()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> Vec<ContinuousRecord> {
        self.rows.records().map(Measurement::to_record).collect()
    }

    /// Mean, standard deviation and histogram for the current rows
    pub fn summary(&self) -> ContinuousSummary {
        continuous::summarize(&self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_follows_edits() {
        let mut sheet = ContinuousSheet::with_rows((1..=5).map(|i| {
            Measurement::new(format!("Person {}", i), i as f64)
        }));

        let summary = sheet.summary();
        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert_eq!(summary.bins.len(), 5);

        sheet.set_height(RecordId(5), "1").unwrap();
        let summary = sheet.summary();
        assert!((summary.mean - 2.2).abs() < 1e-12);
        assert_eq!(summary.binned_count(), 5);
    }

    #[test]
    fn test_removing_every_row() {
        let mut sheet = ContinuousSheet::with_rows(vec![Measurement::new("Chair", 45.0)]);
        sheet.remove_row(RecordId(1)).unwrap();

        let summary = sheet.summary();
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.std_dev, 0.0);
        assert!(summary.bins.is_empty());
    }

    #[test]
    fn test_set_height_coerces() {
        let mut sheet = ContinuousSheet::new();
        let id = sheet.add_row();
        assert_eq!(sheet.set_height(id, "172.5cm").unwrap(), 172.5);
        assert_eq!(sheet.set_height(id, "tall").unwrap(), 0.0);
        sheet.set_object(id, "Person 1").unwrap();
        assert_eq!(sheet.get(id).unwrap().object, "Person 1");
    }

    #[test]
    fn test_remove_missing_row() {
        let mut sheet = ContinuousSheet::new();
        assert!(sheet.remove_row(RecordId(1)).is_err());
    }
}
