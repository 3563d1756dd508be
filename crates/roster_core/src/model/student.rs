//! Student record model.
//!
//! # Responsibility
//! - Define the record stored in the roster and its snapshot type.
//! - Keep the wire shape compatible with previously exported rosters.
//!
//! # Invariants
//! - `id` is assigned by the record store, never by callers.
//! - `name` and `course` are non-empty once past the form contract.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Integer identifier assigned by the record store.
pub type StudentId = i64;

/// Immutable, shareable view of the whole roster at one point in time.
///
/// Every store mutation produces a fresh snapshot; holders of an older
/// snapshot keep seeing the collection exactly as it was.
pub type Snapshot = Arc<[Student]>;

/// Canonical roster record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: u32,
    pub course: String,
    /// Conventionally 0-100, but not bounded.
    pub grade: f64,
    /// Serialized as `isPresent`.
    pub is_present: bool,
}

impl Student {
    /// Materializes a draft under the given id.
    pub fn from_draft(id: StudentId, draft: StudentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            age: draft.age,
            course: draft.course,
            grade: draft.grade,
            is_present: draft.is_present,
        }
    }

    /// Returns a copy with the attendance flag flipped.
    pub fn with_status_toggled(&self) -> Self {
        Self {
            is_present: !self.is_present,
            ..self.clone()
        }
    }
}

/// Student fields before an id is assigned.
///
/// Drafts are treated as verified values: the record store does not check
/// them again. Build them through [`crate::model::form::StudentForm`] when the
/// input comes from a user.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub age: u32,
    pub course: String,
    /// Must be finite; storage adapters refuse to save NaN or infinities.
    pub grade: f64,
    pub is_present: bool,
}

impl StudentDraft {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        course: impl Into<String>,
        grade: f64,
        is_present: bool,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            course: course.into(),
            grade,
            is_present,
        }
    }
}
