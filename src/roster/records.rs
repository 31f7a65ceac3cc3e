//! # Working Set and Snapshot
//!
//! The [`RecordStore`] holds the two collections the console works with:
//!
//! - The **Working Set**: what the table shows. Every filter, save and delete
//!   rewrites it.
//! - The **Snapshot**: the full list as fetched, captured once and never written again.
//!
//! Clearing the search restores the Working Set from the Snapshot. Since the Snapshot
//! is not refreshed after edits or deletes, restoring it also brings back deleted rows
//! and the pre-edit values. Callers that rely on edits surviving a search reset will be
//! surprised; this mirrors how the console has always behaved.

use crate::model::{UserId, UserRecord};
use chrono::{DateTime, Utc};

/// The immutable baseline captured at load time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    records: Vec<UserRecord>,
    captured_at: DateTime<Utc>,
}

impl Snapshot {
    fn capture(records: Vec<UserRecord>) -> Self {
        Self {
            records,
            captured_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    working: Vec<UserRecord>,
    snapshot: Option<Snapshot>,
}

impl RecordStore {
    /// Seeds both the Working Set and the Snapshot from a fetch result.
    pub fn populate(&mut self, records: Vec<UserRecord>) {
        self.snapshot = Some(Snapshot::capture(records.clone()));
        self.working = records;
    }

    pub fn working(&self) -> &[UserRecord] {
        &self.working
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    pub fn position(&self, id: &UserId) -> Option<usize> {
        self.working.iter().position(|r| &r.id == id)
    }

    pub fn get(&self, id: &UserId) -> Option<&UserRecord> {
        self.working.iter().find(|r| &r.id == id)
    }

    /// Replaces the Working Set with the Snapshot contents (empty before load).
    pub fn restore_snapshot(&mut self) {
        self.working = self
            .snapshot
            .as_ref()
            .map(|s| s.records.clone())
            .unwrap_or_default();
    }

    /// Keeps only Working Set records matching `keep`, preserving order.
    pub fn retain<F: FnMut(&UserRecord) -> bool>(&mut self, keep: F) {
        self.working.retain(keep);
    }

    /// Swaps the record at `index` for `record`, returning the old one.
    pub fn replace_at(&mut self, index: usize, record: UserRecord) -> UserRecord {
        std::mem::replace(&mut self.working[index], record)
    }

    pub fn push(&mut self, record: UserRecord) {
        self.working.push(record);
    }
}
