//! Ordered record rows keyed by locally allocated ids
//!
//! Each table hands out ids from its own counter, starting at 1. Ids grow
//! monotonically and are never reused, even after the row is removed, so a
//! stale id from the presentation layer can only miss, never hit the wrong
//! row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{WorkbenchError, WorkbenchResult};

/// Identifier of a row within one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record together with its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row<T> {
    pub id: RecordId,
    #[serde(flatten)]
    pub record: T,
}

/// Insertion-ordered rows with a monotonically increasing id counter
#[derive(Debug, Clone)]
pub struct RecordTable<T> {
    rows: Vec<Row<T>>,
    next_id: u64,
}

impl<T> Default for RecordTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordTable<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a table whose rows get ids 1, 2, 3, ...
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.push(record);
        }
        table
    }

    /// Append a record at the end and return its fresh id
    pub fn push(&mut self, record: T) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, record });
        id
    }

    /// Remove a record by id
    pub fn remove(&mut self, id: RecordId) -> WorkbenchResult<T> {
        let index = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(WorkbenchError::RowNotFound { id })?;
        Ok(self.rows.remove(index).record)
    }

    /// Remove every row; the id counter keeps counting
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| &row.record)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows
            .iter_mut()
            .find(|row| row.id == id)
            .map(|row| &mut row.record)
    }

    /// Apply an edit to one record
    pub fn update<R>(&mut self, id: RecordId, edit: impl FnOnce(&mut T) -> R) -> WorkbenchResult<R> {
        self.get_mut(id)
            .map(edit)
            .ok_or(WorkbenchError::RowNotFound { id })
    }

    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.record)
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.rows.iter().map(|row| row.id)
    }

    /// The id the next `push` will allocate
    pub fn next_id(&self) -> RecordId {
        RecordId(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
