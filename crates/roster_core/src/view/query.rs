//! Query descriptor for roster projections.
//!
//! Values are built by the caller for every projection; nothing here is
//! cached by the core. Parsing from text never fails: unrecognized values
//! fall back to the permissive choice (`All` filters, no sorting).

/// Sentinel text for "no course filter".
const ALL: &str = "All";

/// Course filter: everything, or exactly one course (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CourseFilter {
    #[default]
    All,
    Course(String),
}

impl CourseFilter {
    /// Maps the `"All"` sentinel to [`CourseFilter::All`], anything else to
    /// an exact course match.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Course(value.to_string())
        }
    }

    pub fn matches(&self, course: &str) -> bool {
        match self {
            Self::All => true,
            Self::Course(expected) => expected == course,
        }
    }
}

/// Attendance filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Present,
    Absent,
}

impl StatusFilter {
    /// Case-insensitive parse; unknown text means `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "present" => Self::Present,
            "absent" => Self::Absent,
            _ => Self::All,
        }
    }

    pub fn matches(self, is_present: bool) -> bool {
        match self {
            Self::All => true,
            Self::Present => is_present,
            Self::Absent => !is_present,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by name collation.
    #[default]
    Name,
    /// Descending by grade.
    Grade,
    /// Keep the filtered order.
    Unsorted,
}

impl SortKey {
    /// Case-insensitive parse; unknown text means `Unsorted`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            "grade" => Self::Grade,
            _ => Self::Unsorted,
        }
    }
}

/// Full projection input besides the roster itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Case-insensitive substring matched against names; empty matches all.
    pub search_text: String,
    pub course_filter: CourseFilter,
    pub status_filter: StatusFilter,
    pub sort_key: SortKey,
}

impl Query {
    /// Default query: no filters, sorted by name.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn course(mut self, filter: CourseFilter) -> Self {
        self.course_filter = filter;
        self
    }

    pub fn status(mut self, filter: StatusFilter) -> Self {
        self.status_filter = filter;
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }
}
