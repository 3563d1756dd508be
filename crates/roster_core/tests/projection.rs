use roster_core::{
    project, CourseFilter, Query, RecordStore, SortKey, StatusFilter, Student, StudentDraft,
};

fn student(id: i64, name: &str, course: &str, grade: f64, is_present: bool) -> Student {
    Student {
        id,
        name: name.to_string(),
        age: 20,
        course: course.to_string(),
        grade,
        is_present,
    }
}

fn roster() -> Vec<Student> {
    vec![
        student(1, "Bob", "Math", 95.0, true),
        student(2, "Amy", "Art", 70.0, false),
        student(3, "carl", "Math", 70.0, false),
        student(4, "Bobby", "Bio", 88.0, true),
        student(5, "Dana", "Art", 95.0, true),
    ]
}

fn ids(rows: &[Student]) -> Vec<i64> {
    rows.iter().map(|student| student.id).collect()
}

#[test]
fn scenario_add_then_project_by_course_and_status() {
    let mut store = RecordStore::new(vec![
        student(1, "Bob", "Math", 95.0, true),
        student(2, "Amy", "Art", 70.0, false),
    ]);
    let snapshot = store.add(StudentDraft::new("Cid", 20, "Math", 88.0, true));
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[2].id, 3);

    let math = project(
        &snapshot,
        &Query::new()
            .course(CourseFilter::parse("Math"))
            .sort_by(SortKey::Name),
    );
    assert_eq!(ids(&math.rows), vec![1, 3]);

    let absent = project(&snapshot, &Query::new().status(StatusFilter::Absent));
    assert_eq!(ids(&absent.rows), vec![2]);
}

#[test]
fn projection_is_pure() {
    let records = roster();
    let query = Query::new()
        .search("b")
        .status(StatusFilter::Present)
        .sort_by(SortKey::Grade);

    assert_eq!(project(&records, &query), project(&records, &query));
}

#[test]
fn search_is_case_insensitive_substring() {
    let records = roster();
    let projection = project(&records, &Query::new().search("BOB"));

    assert_eq!(ids(&projection.rows), vec![1, 4]);
}

#[test]
fn empty_search_keeps_everyone() {
    let records = roster();
    let projection = project(&records, &Query::new().sort_by(SortKey::Unsorted));

    assert_eq!(ids(&projection.rows), vec![1, 2, 3, 4, 5]);
}

#[test]
fn every_row_passes_all_three_filters() {
    let records = roster();
    let queries = [
        Query::new().search("a").course(CourseFilter::parse("Art")),
        Query::new().search("b").status(StatusFilter::Present),
        Query::new()
            .course(CourseFilter::parse("Math"))
            .status(StatusFilter::Absent),
        Query::new()
            .search("o")
            .course(CourseFilter::parse("Bio"))
            .status(StatusFilter::Absent),
    ];

    for query in &queries {
        let projection = project(&records, query);
        let needle = query.search_text.to_lowercase();
        for row in &projection.rows {
            assert!(row.name.to_lowercase().contains(&needle));
            assert!(query.course_filter.matches(&row.course));
            assert!(query.status_filter.matches(row.is_present));
        }

        let expected = records
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .filter(|s| query.course_filter.matches(&s.course))
            .filter(|s| query.status_filter.matches(s.is_present))
            .count();
        assert_eq!(projection.rows.len(), expected);
    }
}

#[test]
fn course_filter_is_case_sensitive() {
    let records = roster();
    let projection = project(&records, &Query::new().course(CourseFilter::parse("math")));

    assert!(projection.is_empty());
}

#[test]
fn name_sort_is_alphabetical_ignoring_case() {
    let records = roster();
    let projection = project(&records, &Query::new().sort_by(SortKey::Name));

    assert_eq!(ids(&projection.rows), vec![2, 1, 4, 3, 5]);
}

#[test]
fn name_sort_places_accented_names_with_their_base_letter() {
    let records = vec![
        student(1, "Eve", "Math", 80.0, true),
        student(2, "Zoe", "Math", 80.0, true),
        student(3, "Émile", "Math", 80.0, true),
        student(4, "Ana", "Math", 80.0, true),
    ];
    let projection = project(&records, &Query::new().sort_by(SortKey::Name));

    let names = projection
        .rows
        .iter()
        .map(|student| student.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Ana", "Émile", "Eve", "Zoe"]);
}

#[test]
fn grade_sort_is_descending_and_stable() {
    let records = roster();
    let projection = project(&records, &Query::new().sort_by(SortKey::Grade));

    // 95: Bob(1) before Dana(5); 70: Amy(2) before carl(3).
    assert_eq!(ids(&projection.rows), vec![1, 5, 4, 2, 3]);
}

#[test]
fn name_sort_keeps_filtered_order_for_equal_names() {
    let records = vec![
        student(7, "Sam", "Math", 60.0, true),
        student(3, "Ann", "Math", 60.0, true),
        student(5, "Sam", "Art", 90.0, false),
        student(1, "Sam", "Bio", 75.0, true),
    ];
    let projection = project(&records, &Query::new().sort_by(SortKey::Name));

    assert_eq!(ids(&projection.rows), vec![3, 7, 5, 1]);
}

#[test]
fn unknown_sort_key_preserves_filtered_order() {
    let records = roster();
    let query = Query::new()
        .status(StatusFilter::parse("present"))
        .sort_by(SortKey::parse("height"));
    let projection = project(&records, &query);

    assert_eq!(ids(&projection.rows), vec![1, 4, 5]);
}

#[test]
fn aggregates_cover_the_full_roster_regardless_of_filters() {
    let records = roster();
    let projection = project(
        &records,
        &Query::new()
            .search("zzz")
            .status(StatusFilter::Absent),
    );

    assert!(projection.is_empty());
    assert_eq!(projection.stats.total, 5);
    assert_eq!(projection.stats.present, 3);
    assert_eq!(projection.stats.absent, 2);
    assert_eq!(
        projection.stats.present + projection.stats.absent,
        projection.stats.total
    );
    assert_eq!(projection.course_choices, vec!["All", "Math", "Art", "Bio"]);
}

#[test]
fn summary_reports_visible_and_total_counts() {
    let records = roster();
    let projection = project(&records, &Query::new().course(CourseFilter::parse("Art")));

    assert_eq!(projection.summary(), "Showing 2 of 5 students");
}

#[test]
fn empty_roster_projects_to_nothing_but_the_all_choice() {
    let projection = project(&[], &Query::new());

    assert!(projection.rows.is_empty());
    assert_eq!(projection.stats.total, 0);
    assert_eq!(projection.course_choices, vec!["All"]);
}
