//! Roster persistence contract and shared error type.

use crate::db::DbError;
use crate::model::student::{Student, StudentId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for roster load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    MissingRequiredTable(&'static str),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "roster storage i/o failed: {err}"),
            Self::Serialization(err) => write!(f, "roster snapshot is not valid json: {err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "roster database is missing table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted roster data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Storage adapter for whole-roster snapshots.
///
/// Called by the session owner at start-up (`load`) and after every
/// mutation (`save`); the record store itself never touches storage.
pub trait RosterRepository {
    /// Returns the saved roster, or `None` when nothing was saved yet.
    fn load(&self) -> RepoResult<Option<Vec<Student>>>;
    /// Replaces the saved roster with `students`, in order.
    fn save(&mut self, students: &[Student]) -> RepoResult<()>;
}

/// Rejects loaded rosters that would break the store's id invariant.
/// Rejects grades that neither store can read back (NaN and infinities).
pub(crate) fn ensure_finite_grades(students: &[Student]) -> RepoResult<()> {
    match students.iter().find(|student| !student.grade.is_finite()) {
        Some(student) => Err(RepoError::InvalidData(format!(
            "grade of student {} is not a finite number",
            student.id
        ))),
        None => Ok(()),
    }
}

pub(crate) fn ensure_unique_ids(students: &[Student]) -> RepoResult<()> {
    let mut seen: HashSet<StudentId> = HashSet::with_capacity(students.len());
    for student in students {
        if !seen.insert(student.id) {
            return Err(RepoError::InvalidData(format!(
                "duplicate student id {}",
                student.id
            )));
        }
    }
    Ok(())
}
