//! Per-student display details derived for list renderers.

use crate::model::student::{Student, StudentId};

/// Grades at or above this mark earn the top-performer badge.
const TOP_PERFORMER_GRADE: f64 = 90.0;
const MID_BAND_GRADE: f64 = 75.0;

/// Coarse grade bucket used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    High,
    Mid,
    Low,
}

impl GradeBand {
    pub fn of(grade: f64) -> Self {
        if grade >= TOP_PERFORMER_GRADE {
            Self::High
        } else if grade >= MID_BAND_GRADE {
            Self::Mid
        } else {
            Self::Low
        }
    }
}

/// Display-ready card for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentCard {
    pub id: StudentId,
    pub name: String,
    pub initials: String,
    pub course: String,
    pub age: u32,
    pub grade: f64,
    pub grade_band: GradeBand,
    pub top_performer: bool,
    pub status_label: &'static str,
}

impl StudentCard {
    pub fn new(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            initials: initials(&student.name),
            course: student.course.clone(),
            age: student.age,
            grade: student.grade,
            grade_band: GradeBand::of(student.grade),
            top_performer: student.grade >= TOP_PERFORMER_GRADE,
            status_label: status_label(student.is_present),
        }
    }
}

impl From<&Student> for StudentCard {
    fn from(student: &Student) -> Self {
        Self::new(student)
    }
}

/// Up to two uppercase initials from the whitespace-separated name parts.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

pub fn status_label(is_present: bool) -> &'static str {
    if is_present {
        "Present"
    } else {
        "Absent"
    }
}
