//! In-process roster adapter, mainly for tests and embedders without storage.

use crate::model::student::Student;
use crate::repo::roster_repo::{RepoError, RepoResult, RosterRepository};
use std::io;

/// Keeps the last saved roster in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRosterRepository {
    stored: Option<Vec<Student>>,
    save_count: usize,
    fail_saves: bool,
    failures_left: usize,
}

impl MemoryRosterRepository {
    /// Empty adapter: `load` reports nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter that already holds `students`.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            stored: Some(students),
            ..Self::default()
        }
    }

    /// Makes every later `save` fail with an i/o error.
    pub fn fail_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Makes only the next `count` saves fail; later saves succeed.
    pub fn fail_next_saves(mut self, count: usize) -> Self {
        self.failures_left = count;
        self
    }

    pub fn stored(&self) -> Option<&[Student]> {
        self.stored.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl RosterRepository for MemoryRosterRepository {
    fn load(&self) -> RepoResult<Option<Vec<Student>>> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, students: &[Student]) -> RepoResult<()> {
        if self.fail_saves || self.failures_left > 0 {
            self.failures_left = self.failures_left.saturating_sub(1);
            return Err(RepoError::Io(io::Error::new(
                io::ErrorKind::Other,
                "memory roster configured to reject saves",
            )));
        }
        self.stored = Some(students.to_vec());
        self.save_count += 1;
        Ok(())
    }
}
