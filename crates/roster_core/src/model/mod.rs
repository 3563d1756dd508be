//! Roster domain model.
//!
//! # Responsibility
//! - Define the canonical student record and its id-less draft form.
//! - Own the raw form contract that turns user input into drafts.
//! - Provide the built-in seed roster used when no snapshot exists.
//!
//! # Invariants
//! - `Student::id` is unique across a live collection.
//! - Only `is_present` changes after a record is created.

pub mod form;
pub mod seed;
pub mod student;
