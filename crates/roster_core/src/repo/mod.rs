//! Persistence adapters for roster snapshots.
//!
//! # Responsibility
//! - Define the load/save contract the session service persists through.
//! - Provide SQLite, JSON-file and in-memory implementations.
//!
//! # Invariants
//! - `load` distinguishes "nothing saved yet" (`None`) from an empty roster.
//! - `save` replaces the stored roster as a whole, preserving order.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod json_repo;
pub mod memory_repo;
pub mod roster_repo;
pub mod sqlite_repo;

pub use json_repo::JsonFileRosterRepository;
pub use memory_repo::MemoryRosterRepository;
pub use roster_repo::{RepoError, RepoResult, RosterRepository};
pub use sqlite_repo::SqliteRosterRepository;
