//! Derived roster views.
//!
//! # Responsibility
//! - Turn a roster snapshot plus a query into the ordered rows to display.
//! - Compute roster-wide aggregates and filter choices.
//! - Shape per-student card details for list renderers.
//!
//! # Invariants
//! - Everything here is a pure function of its inputs.
//! - Aggregates always cover the full roster, never the filtered rows.

pub mod card;
pub mod projector;
pub mod query;

pub use card::{initials, GradeBand, StudentCard};
pub use projector::{
    compare_names, course_choices, project, roster_stats, Projection, RosterStats,
    ALL_COURSES_LABEL,
};
pub use query::{CourseFilter, Query, SortKey, StatusFilter};
