//! Copy-on-write record store.
//!
//! # Responsibility
//! - Hold the current roster snapshot.
//! - Assign ids on add and apply remove/toggle by id.
//!
//! # Invariants
//! - New ids are `max(current ids) + 1`, or `1` for an empty roster.
//! - Unknown ids on remove/toggle leave the snapshot unchanged.
//! - Every successful mutation installs a brand-new snapshot.

use crate::model::student::{Snapshot, Student, StudentDraft, StudentId};
use log::debug;

/// Owner of the canonical roster collection.
///
/// The store performs no validation: seeds are a trusted restore path and
/// drafts are expected to come out of the form contract.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Snapshot,
}

impl RecordStore {
    /// Builds a store from a restored or seeded roster.
    pub fn new(seed: Vec<Student>) -> Self {
        debug!(
            "event=store_init module=store status=ok count={}",
            seed.len()
        );
        Self {
            records: Snapshot::from(seed),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.records.iter().find(|student| student.id == id)
    }

    /// Appends a new record built from `draft` and returns the new snapshot.
    ///
    /// Ids freed by removing the highest-id record can be issued again; see
    /// [`next_student_id`].
    pub fn add(&mut self, draft: StudentDraft) -> Snapshot {
        let id = next_student_id(&self.records);
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend(self.records.iter().cloned());
        next.push(Student::from_draft(id, draft));

        self.records = Snapshot::from(next);
        debug!(
            "event=student_add module=store status=ok id={} count={}",
            id,
            self.records.len()
        );
        self.snapshot()
    }

    /// Drops the record with `id`, if present, and returns the snapshot.
    pub fn remove(&mut self, id: StudentId) -> Snapshot {
        if self.get(id).is_none() {
            debug!("event=student_remove module=store status=noop id={id}");
            return self.snapshot();
        }

        self.records = self
            .records
            .iter()
            .filter(|student| student.id != id)
            .cloned()
            .collect();
        debug!(
            "event=student_remove module=store status=ok id={} count={}",
            id,
            self.records.len()
        );
        self.snapshot()
    }

    /// Flips `is_present` on the record with `id`, if present.
    pub fn toggle_status(&mut self, id: StudentId) -> Snapshot {
        if self.get(id).is_none() {
            debug!("event=student_toggle module=store status=noop id={id}");
            return self.snapshot();
        }

        self.records = self
            .records
            .iter()
            .map(|student| {
                if student.id == id {
                    student.with_status_toggled()
                } else {
                    student.clone()
                }
            })
            .collect();
        debug!("event=student_toggle module=store status=ok id={id}");
        self.snapshot()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Computes the id the next added record will receive.
///
/// This is `max + 1` over the records passed in, not a persisted counter, so
/// an id can come back after the record holding the maximum is removed.
pub fn next_student_id(records: &[Student]) -> StudentId {
    records
        .iter()
        .map(|student| student.id)
        .max()
        .map_or(1, |max| max + 1)
}
