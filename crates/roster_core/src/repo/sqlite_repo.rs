//! SQLite-backed roster adapter.
//!
//! # Responsibility
//! - Persist roster snapshots into the `students` table.
//! - Track whether a roster was ever saved via `roster_state`.
//!
//! # Invariants
//! - `save` rewrites `students` and `roster_state` in one transaction.
//! - Row order on load follows the `position` column written by `save`.

use crate::model::student::Student;
use crate::repo::roster_repo::{
    ensure_finite_grades, ensure_unique_ids, RepoError, RepoResult, RosterRepository,
};
use log::{debug, info};
use rusqlite::{params, Connection, Row, TransactionBehavior};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    age,
    course,
    grade,
    is_present
FROM students
ORDER BY position ASC";

/// Roster adapter over a migrated SQLite connection.
pub struct SqliteRosterRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteRosterRepository<'conn> {
    /// Wraps a connection opened through [`crate::db::open_db`].
    ///
    /// # Errors
    /// - `MissingRequiredTable` when the connection was not migrated.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        for table in ["students", "roster_state"] {
            if !table_exists(conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }
        Ok(Self { conn })
    }
}

impl RosterRepository for SqliteRosterRepository<'_> {
    fn load(&self) -> RepoResult<Option<Vec<Student>>> {
        let saved: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM roster_state WHERE singleton = 1);",
            [],
            |row| row.get(0),
        )?;
        if saved == 0 {
            debug!("event=roster_load module=repo status=empty backend=sqlite");
            return Ok(None);
        }

        let mut stmt = self.conn.prepare(STUDENT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();
        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }
        ensure_unique_ids(&students)?;

        info!(
            "event=roster_load module=repo status=ok backend=sqlite count={}",
            students.len()
        );
        Ok(Some(students))
    }

    fn save(&mut self, students: &[Student]) -> RepoResult<()> {
        ensure_finite_grades(students)?;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute("DELETE FROM students;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO students (id, position, name, age, course, grade, is_present)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            )?;
            for (position, student) in students.iter().enumerate() {
                insert.execute(params![
                    student.id,
                    position as i64,
                    student.name.as_str(),
                    i64::from(student.age),
                    student.course.as_str(),
                    student.grade,
                    bool_to_int(student.is_present),
                ])?;
            }
        }
        tx.execute(
            "INSERT INTO roster_state (singleton, saved_at)
             VALUES (1, (strftime('%s', 'now') * 1000))
             ON CONFLICT(singleton) DO UPDATE SET saved_at = excluded.saved_at;",
            [],
        )?;
        tx.commit()?;

        debug!(
            "event=roster_save module=repo status=ok backend=sqlite count={}",
            students.len()
        );
        Ok(())
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let id: i64 = row.get("id")?;

    let age_value: i64 = row.get("age")?;
    let age = u32::try_from(age_value).map_err(|_| {
        RepoError::InvalidData(format!("invalid age `{age_value}` in students.age (id {id})"))
    })?;

    let is_present = match row.get::<_, i64>("is_present")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_present value `{other}` in students.is_present (id {id})"
            )));
        }
    };

    let name: String = row.get("name")?;
    let course: String = row.get("course")?;
    if name.trim().is_empty() || course.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "blank name or course for student id {id}"
        )));
    }

    Ok(Student {
        id,
        name,
        age,
        course,
        grade: row.get("grade")?,
        is_present,
    })
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
