//! Command-line front end for a roster session.
//!
//! # Responsibility
//! - Open the configured storage adapter and start a roster session.
//! - Map subcommands onto session operations and print the results.
//! - Own the user-facing confirmation step before removals.

mod render;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use roster_core::db::open_db;
use roster_core::view::card::status_label;
use roster_core::{
    course_choices, default_log_level, init_logging, CourseFilter, FormField,
    JsonFileRosterRepository, Query, RosterRepository, RosterService, ServiceError, SortKey,
    SqliteRosterRepository, StatusFilter, StudentForm, StudentId,
};
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "roster.sqlite3";

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage a student roster: add, remove, toggle attendance, search")]
#[command(version)]
struct Cli {
    /// SQLite roster database
    #[arg(long, env = "ROSTER_DB", global = true, conflicts_with = "json")]
    db: Option<PathBuf>,
    /// JSON roster file instead of SQLite
    #[arg(long, global = true)]
    json: Option<PathBuf>,
    /// Log level (trace|debug|info|warn|error); needs --log-dir
    #[arg(long, env = "ROSTER_LOG_LEVEL", global = true, requires = "log_dir")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, env = "ROSTER_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show students matching the given search and filters
    List {
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,
        /// Exact course name, or "All"
        #[arg(short, long, default_value = "All")]
        course: String,
        /// all | present | absent
        #[arg(long, default_value = "all")]
        status: String,
        /// name | grade | none
        #[arg(long, default_value = "name")]
        sort: String,
    },
    /// Add a new student
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        age: String,
        #[arg(long, default_value = "")]
        course: String,
        #[arg(long, default_value = "")]
        grade: String,
        /// Mark the student as present
        #[arg(long)]
        present: bool,
    },
    /// Remove a student
    Remove {
        id: StudentId,
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
    /// Flip a student's attendance status
    Toggle { id: StudentId },
    /// List course filter choices
    Courses,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    match &cli.json {
        Some(path) => {
            let repo = JsonFileRosterRepository::new(path);
            run(repo, cli.command)
        }
        None => {
            let path = cli
                .db
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
            let mut conn = open_db(&path)
                .with_context(|| format!("failed to open roster database {}", path.display()))?;
            let repo = SqliteRosterRepository::try_new(&mut conn)
                .context("roster database is not usable")?;
            run(repo, cli.command)
        }
    }
}

fn run<R: RosterRepository>(repo: R, command: Command) -> Result<()> {
    let mut service = RosterService::start(repo).context("failed to load roster")?;

    match command {
        Command::List {
            search,
            course,
            status,
            sort,
        } => {
            let query = Query::new()
                .search(search)
                .course(CourseFilter::parse(&course))
                .status(StatusFilter::parse(&status))
                .sort_by(SortKey::parse(&sort));
            print!("{}", render::projection(&service.project(&query)));
        }
        Command::Add {
            name,
            age,
            course,
            grade,
            present,
        } => {
            let mut form = StudentForm::new();
            form.set(FormField::Name, name);
            form.set(FormField::Age, age);
            form.set(FormField::Course, course);
            form.set(FormField::Grade, grade);
            form.is_present = present;

            let snapshot = match service.add_from_form(&mut form) {
                Ok(snapshot) => snapshot,
                Err(ServiceError::Form(errors)) => {
                    for error in errors.iter() {
                        eprintln!("--{}: {error}", error.field().key());
                    }
                    bail!("student was not added");
                }
                Err(err) => return Err(err.into()),
            };
            if let Some(added) = snapshot.last() {
                println!("Added {} with id {}", added.name, added.id);
            }
        }
        Command::Remove { id, yes } => {
            if !yes {
                bail!("refusing to remove student {id} without --yes");
            }
            let before = service.snapshot().len();
            let after = service.remove_student(id);
            if after.len() == before {
                println!("No student with id {id}");
            } else {
                println!("Removed student {id}");
            }
        }
        Command::Toggle { id } => {
            let snapshot = service.toggle_status(id);
            match snapshot.iter().find(|student| student.id == id) {
                Some(student) => println!(
                    "{} is now {}",
                    student.name,
                    status_label(student.is_present)
                ),
                None => println!("No student with id {id}"),
            }
        }
        Command::Courses => {
            for course in course_choices(&service.snapshot()) {
                println!("{course}");
            }
        }
    }

    if let Some(err) = service.take_save_error() {
        return Err(anyhow!(err).context("roster changes were not saved"));
    }
    Ok(())
}
