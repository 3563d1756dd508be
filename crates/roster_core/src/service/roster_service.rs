//! Roster session service.
//!
//! # Responsibility
//! - Restore the roster from the adapter, or seed the default roster.
//! - Apply store mutations and persist the resulting snapshot.
//! - Expose projections over the current snapshot.
//!
//! # Invariants
//! - Every mutation that changes the roster triggers exactly one save.
//! - A failed save never rolls back the in-memory mutation; the error is
//!   logged and kept until the caller takes it.
//! - No query state is cached between projections.

use crate::model::form::{FormErrors, StudentForm};
use crate::model::seed::default_students;
use crate::model::student::{Snapshot, Student, StudentDraft, StudentId};
use crate::repo::roster_repo::{RepoError, RosterRepository};
use crate::store::RecordStore;
use crate::view::{project, Projection, Query};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from roster session operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Form input failed the required-field contract.
    Form(FormErrors),
    /// Adapter failure while restoring the roster.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(errors) => write!(f, "invalid student form: {errors}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(errors) => Some(errors),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<FormErrors> for ServiceError {
    fn from(value: FormErrors) -> Self {
        Self::Form(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// One roster session over a persistence adapter.
pub struct RosterService<R: RosterRepository> {
    store: RecordStore,
    repo: R,
    last_save_error: Option<RepoError>,
}

impl<R: RosterRepository> RosterService<R> {
    /// Restores the roster from `repo`.
    ///
    /// When the adapter has nothing saved, the built-in default roster is
    /// used and written back immediately.
    ///
    /// # Errors
    /// - Returns adapter errors from `load`; a failing initial save is kept
    ///   for [`RosterService::take_save_error`] instead.
    pub fn start(repo: R) -> ServiceResult<Self> {
        match repo.load()? {
            Some(students) => {
                info!(
                    "event=session_start module=service status=ok source=restored count={}",
                    students.len()
                );
                Ok(Self::from_parts(RecordStore::new(students), repo))
            }
            None => {
                let seed = default_students();
                info!(
                    "event=session_start module=service status=ok source=seed count={}",
                    seed.len()
                );
                let mut service = Self::from_parts(RecordStore::new(seed), repo);
                service.persist();
                Ok(service)
            }
        }
    }

    /// Starts a session from an explicit roster without loading or saving.
    pub fn with_students(repo: R, students: Vec<Student>) -> Self {
        Self::from_parts(RecordStore::new(students), repo)
    }

    fn from_parts(store: RecordStore, repo: R) -> Self {
        Self {
            store,
            repo,
            last_save_error: None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Projects the current snapshot through `query`.
    pub fn project(&self, query: &Query) -> Projection {
        project(&self.store.snapshot(), query)
    }

    /// Adds a verified draft and persists the new roster.
    pub fn add_student(&mut self, draft: StudentDraft) -> Snapshot {
        let snapshot = self.store.add(draft);
        self.persist();
        snapshot
    }

    /// Submits `form` and adds the resulting draft.
    ///
    /// On success the form is reset; on failure it keeps the entered values
    /// and its field errors.
    ///
    /// # Errors
    /// - `ServiceError::Form` with every failing field.
    pub fn add_from_form(&mut self, form: &mut StudentForm) -> ServiceResult<Snapshot> {
        let draft = form.submit()?;
        Ok(self.add_student(draft))
    }

    /// Removes `id`; callers confirm with the user before calling this.
    pub fn remove_student(&mut self, id: StudentId) -> Snapshot {
        let before = self.store.snapshot();
        let after = self.store.remove(id);
        self.persist_if_changed(&before, &after);
        after
    }

    pub fn toggle_status(&mut self, id: StudentId) -> Snapshot {
        let before = self.store.snapshot();
        let after = self.store.toggle_status(id);
        self.persist_if_changed(&before, &after);
        after
    }

    /// Returns and clears the most recent save failure.
    pub fn take_save_error(&mut self) -> Option<RepoError> {
        self.last_save_error.take()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    fn persist_if_changed(&mut self, before: &Snapshot, after: &Snapshot) {
        if !Arc::ptr_eq(before, after) {
            self.persist();
        }
    }

    fn persist(&mut self) {
        let snapshot = self.store.snapshot();
        match self.repo.save(&snapshot) {
            Ok(()) => {}
            Err(err) => {
                error!(
                    "event=roster_save module=service status=error count={} error={}",
                    snapshot.len(),
                    err
                );
                self.last_save_error = Some(err);
            }
        }
    }
}
