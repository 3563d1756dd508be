//! Form input contract for new students.
//!
//! # Responsibility
//! - Hold raw, user-typed field values until submission.
//! - Check required fields once and convert numeric text into a draft.
//!
//! # Invariants
//! - `name` and `course` must be non-empty after trimming.
//! - `age` and `grade` must be present and parse as numbers.
//! - A successful `validate` never mutates the form; `reset` is explicit.

use crate::model::student::StudentDraft;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input fields of the add-student form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Age,
    Course,
    Grade,
}

impl FormField {
    /// Stable lowercase field key, used for CLI flags and messages.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Course => "course",
            Self::Grade => "grade",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Course => "Course",
            Self::Grade => "Grade",
        }
    }
}

/// Single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Field is blank (after trim for text fields).
    Required(FormField),
    /// Age text is not a non-negative whole number.
    InvalidAge(String),
    /// Grade text is not a finite number.
    InvalidGrade(String),
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            Self::Required(field) => *field,
            Self::InvalidAge(_) => FormField::Age,
            Self::InvalidGrade(_) => FormField::Grade,
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field.label()),
            Self::InvalidAge(value) => {
                write!(f, "Age must be a whole number, got `{value}`")
            }
            Self::InvalidGrade(value) => write!(f, "Grade must be a number, got `{value}`"),
        }
    }
}

impl Error for FormError {}

/// All field errors produced by one submission, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FormError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn get(&self, field: FormField) -> Option<&FormError> {
        self.errors.iter().find(|err| err.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormError> {
        self.errors.iter()
    }

    fn push(&mut self, error: FormError) {
        self.errors.push(error);
    }

    fn remove(&mut self, field: FormField) {
        self.errors.retain(|err| err.field() != field);
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl Error for FormErrors {}

/// Raw add-student form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub course: String,
    pub grade: String,
    /// "Mark as Present" checkbox; unchecked by default.
    pub is_present: bool,
    errors: FormErrors,
}

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one text field and drops any error previously shown for it.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Age => self.age = value,
            FormField::Course => self.course = value,
            FormField::Grade => self.grade = value,
        }
        self.clear_error(field);
    }

    pub fn clear_error(&mut self, field: FormField) {
        self.errors.remove(field);
    }

    /// Errors from the most recent [`StudentForm::submit`].
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Checks the form and converts it into a draft.
    ///
    /// Text fields are trimmed in the resulting draft.
    ///
    /// # Errors
    /// - Returns every failing field at once, in field order.
    pub fn validate(&self) -> Result<StudentDraft, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FormError::Required(FormField::Name));
        }

        let age_text = self.age.trim();
        let age = if age_text.is_empty() {
            errors.push(FormError::Required(FormField::Age));
            None
        } else {
            match age_text.parse::<u32>() {
                Ok(age) => Some(age),
                Err(_) => {
                    errors.push(FormError::InvalidAge(age_text.to_string()));
                    None
                }
            }
        };

        let course = self.course.trim();
        if course.is_empty() {
            errors.push(FormError::Required(FormField::Course));
        }

        let grade_text = self.grade.trim();
        let grade = if grade_text.is_empty() {
            errors.push(FormError::Required(FormField::Grade));
            None
        } else {
            match grade_text.parse::<f64>() {
                Ok(grade) if grade.is_finite() => Some(grade),
                _ => {
                    errors.push(FormError::InvalidGrade(grade_text.to_string()));
                    None
                }
            }
        };

        match (age, grade) {
            (Some(age), Some(grade)) if errors.is_empty() => Ok(StudentDraft::new(
                name,
                age,
                course,
                grade,
                self.is_present,
            )),
            _ => Err(errors),
        }
    }

    /// Validates and records the outcome on the form.
    ///
    /// On success the form is reset to its blank state; on failure the
    /// entered values are kept and the errors become visible via
    /// [`StudentForm::errors`].
    pub fn submit(&mut self) -> Result<StudentDraft, FormErrors> {
        match self.validate() {
            Ok(draft) => {
                self.reset();
                Ok(draft)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
