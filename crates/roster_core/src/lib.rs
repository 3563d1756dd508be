//! Core roster logic: record store, view projection and persistence adapters.
//! This crate is the single source of truth for roster invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::form::{FormError, FormErrors, FormField, StudentForm};
pub use model::seed::default_students;
pub use model::student::{Snapshot, Student, StudentDraft, StudentId};
pub use repo::{
    JsonFileRosterRepository, MemoryRosterRepository, RepoError, RepoResult, RosterRepository,
    SqliteRosterRepository,
};
pub use service::roster_service::{RosterService, ServiceError, ServiceResult};
pub use store::{next_student_id, RecordStore};
pub use view::{
    course_choices, initials, project, roster_stats, CourseFilter, GradeBand, Projection, Query,
    RosterStats, SortKey, StatusFilter, StudentCard,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
