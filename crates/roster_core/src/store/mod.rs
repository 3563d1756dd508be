//! Canonical roster state.
//!
//! # Responsibility
//! - Own the ordered student collection for a session.
//! - Expose the only mutation paths: add, remove, toggle status.
//!
//! # Invariants
//! - Ids are unique across the live collection.
//! - Mutations never touch a snapshot already handed out.

pub mod record_store;

pub use record_store::{next_student_id, RecordStore};
