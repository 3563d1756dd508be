//! Roster projection: filter, sort, aggregate.
//!
//! # Responsibility
//! - Produce the rows to display for a snapshot and a query.
//! - Compute roster-wide counts and the course filter choices.
//!
//! # Invariants
//! - Filters apply in order search, course, status; a row must pass all three.
//! - Sorting is stable, so equal keys keep their filtered order.
//! - Counts and course choices ignore the query entirely.

use crate::model::student::Student;
use crate::view::query::{Query, SortKey};
use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Synthetic first entry of the course choice list.
pub const ALL_COURSES_LABEL: &str = "All";

/// Attendance counts over the full roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

/// Result of projecting one snapshot through one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Filtered and sorted rows, ready for display.
    pub rows: Vec<Student>,
    /// Counts over the full roster.
    pub stats: RosterStats,
    /// `"All"` followed by distinct courses in first-seen order.
    pub course_choices: Vec<String>,
}

impl Projection {
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    pub fn total(&self) -> usize {
        self.stats.total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One-line "Showing X of Y students" summary.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} students",
            self.visible_count(),
            self.total()
        )
    }
}

/// Projects `records` through `query`.
pub fn project(records: &[Student], query: &Query) -> Projection {
    let needle = query.search_text.to_lowercase();

    let mut rows = records
        .iter()
        .filter(|student| needle.is_empty() || student.name.to_lowercase().contains(&needle))
        .filter(|student| query.course_filter.matches(&student.course))
        .filter(|student| query.status_filter.matches(student.is_present))
        .cloned()
        .collect::<Vec<_>>();

    // `sort_by` is stable.
    match query.sort_key {
        SortKey::Name => {
            let mut collator = name_collator();
            rows.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
        SortKey::Grade => rows.sort_by(|a, b| compare_grades_desc(a.grade, b.grade)),
        SortKey::Unsorted => {}
    }

    Projection {
        rows,
        stats: roster_stats(records),
        course_choices: course_choices(records),
    }
}

/// Counts present and absent students across the whole roster.
pub fn roster_stats(records: &[Student]) -> RosterStats {
    let total = records.len();
    let present = records.iter().filter(|student| student.is_present).count();
    RosterStats {
        total,
        present,
        absent: total - present,
    }
}

/// Returns `"All"` plus each distinct course in first-seen order.
pub fn course_choices(records: &[Student]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut choices = vec![ALL_COURSES_LABEL.to_string()];
    for student in records {
        if seen.insert(student.course.as_str()) {
            choices.push(student.course.clone());
        }
    }
    choices
}

/// Name collation used by [`SortKey::Name`].
///
/// CLDR root collation at tertiary strength: accents and case only break ties
/// between otherwise equal names, and lowercase sorts before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_collator().collate(a, b)
}

// Punctuation and spaces stay significant; no code point tiebreak, so
// canonically equal names compare equal and keep their filtered order.
fn name_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, false)
}

/// Higher grades first; incomparable values (NaN) count as equal.
fn compare_grades_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
