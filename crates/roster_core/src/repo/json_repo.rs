//! JSON-file roster adapter.
//!
//! Stores the snapshot as a single JSON array of student objects using the
//! `id/name/age/course/grade/isPresent` field names, so rosters exported from
//! browser storage load unchanged.
//!
//! # Invariants
//! - A missing file means "nothing saved yet".
//! - Writes go to a sibling temp file first and are renamed into place.

use crate::model::student::Student;
use crate::repo::roster_repo::{
    ensure_finite_grades, ensure_unique_ids, RepoResult, RosterRepository,
};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Roster adapter persisting to one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRosterRepository {
    path: PathBuf,
}

impl JsonFileRosterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl RosterRepository for JsonFileRosterRepository {
    fn load(&self) -> RepoResult<Option<Vec<Student>>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("event=roster_load module=repo status=empty backend=json");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let students: Vec<Student> = serde_json::from_str(&text)?;
        ensure_unique_ids(&students)?;

        info!(
            "event=roster_load module=repo status=ok backend=json count={}",
            students.len()
        );
        Ok(Some(students))
    }

    fn save(&mut self, students: &[Student]) -> RepoResult<()> {
        ensure_finite_grades(students)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_vec_pretty(students)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, payload)?;
        fs::rename(&temp_path, &self.path)?;

        debug!(
            "event=roster_save module=repo status=ok backend=json count={}",
            students.len()
        );
        Ok(())
    }
}
