//! Discrete sheet: object counts by type and color

use serde::{Deserialize, Serialize};

use distlab_stats::discrete;
use distlab_stats::{DiscreteRecord, DiscreteTable};

use crate::error::WorkbenchResult;
use crate::input::coerce_count;
use crate::table::{RecordId, RecordTable, Row};

/// How many objects of one type and color were seen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectCount {
    pub object_type: String,
    pub color: String,
    pub count: u32,
}

impl ObjectCount {
    pub fn new(object_type: impl Into<String>, color: impl Into<String>, count: u32) -> Self {
        Self {
            object_type: object_type.into(),
            color: color.into(),
            count,
        }
    }

    /// Display label, e.g. `"Pen (Blue)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.object_type, self.color)
    }

    pub fn to_record(&self) -> DiscreteRecord {
        DiscreteRecord::new(self.label(), self.count)
    }
}

/// Editable list of object counts
#[derive(Debug, Clone, Default)]
pub struct DiscreteSheet {
    rows: RecordTable<ObjectCount>,
}

impl DiscreteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = ObjectCount>) -> Self {
        Self {
            rows: RecordTable::from_records(rows),
        }
    }

    /// Append an empty row with a zero count
    pub fn add_row(&mut self) -> RecordId {
        self.push(ObjectCount::default())
    }

    pub fn push(&mut self, row: ObjectCount) -> RecordId {
        let id = self.rows.push(row);
        tracing::debug!("Added discrete row {}", id);
        id
    }

    pub fn remove_row(&mut self, id: RecordId) -> WorkbenchResult<ObjectCount> {
        let removed = self.rows.remove(id)?;
        tracing::debug!("Removed discrete row {}", id);
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn set_object_type(&mut self, id: RecordId, value: &str) -> WorkbenchResult<()> {
        self.rows.update(id, |row| row.object_type = value.to_string())
    }

    pub fn set_color(&mut self, id: RecordId, value: &str) -> WorkbenchResult<()> {
        self.rows.update(id, |row| row.color = value.to_string())
    }

    /// Set a count from raw text; returns the coerced value
    pub fn set_count(&mut self, id: RecordId, raw: &str) -> WorkbenchResult<u32> {
        let count = coerce_count(raw);
        self.rows.update(id, |row| row.count = count)?;
        tracing::debug!("Set count of discrete row {} to {}", id, count);
        Ok(count)
    }

    pub fn get(&self, id: RecordId) -> Option<&ObjectCount> {
        self.rows.get(id)
    }

    pub fn rows(&self) -> &[Row<ObjectCount>] {
        self.rows.rows()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> Vec<DiscreteRecord> {
        self.rows.records().map(ObjectCount::to_record).collect()
    }

    /// Relative frequencies for the current rows, in row order
    pub fn summary(&self) -> DiscreteTable {
        discrete::summarize(&self.records())
    }
}
