//! Built-in roster used when no saved snapshot exists.

use crate::model::student::Student;

/// Returns the default seed roster with ids `1..=n`.
pub fn default_students() -> Vec<Student> {
    vec![
        student(1, "Alice Johnson", 20, "React", 92.0, true),
        student(2, "Brian Smith", 22, "Node.js", 78.5, false),
        student(3, "Chloe Davis", 19, "React", 85.0, true),
        student(4, "Daniel Kim", 21, "Python", 67.0, true),
        student(5, "Emma Wilson", 23, "Python", 95.5, false),
    ]
}

fn student(id: i64, name: &str, age: u32, course: &str, grade: f64, is_present: bool) -> Student {
    Student {
        id,
        name: name.to_string(),
        age,
        course: course.to_string(),
        grade,
        is_present,
    }
}
