use roster_core::{JsonFileRosterRepository, RepoError, RosterRepository, Student};

fn student(id: i64, name: &str, is_present: bool) -> Student {
    Student {
        id,
        name: name.to_string(),
        age: 20,
        course: "React".to_string(),
        grade: 81.5,
        is_present,
    }
}

#[test]
fn missing_file_means_nothing_saved() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRosterRepository::new(dir.path().join("students.json"));

    assert!(repo.load().unwrap().is_none());
}

#[test]
fn save_then_load_roundtrip_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("students.json");
    let mut repo = JsonFileRosterRepository::new(&path);
    let students = vec![student(2, "Amy", false), student(1, "Bob", true)];

    repo.save(&students).unwrap();

    assert!(path.exists());
    assert!(!dir.path().join("nested").join("students.json.tmp").exists());
    assert_eq!(repo.load().unwrap(), Some(students));
}

#[test]
fn saved_file_uses_browser_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.json");
    let mut repo = JsonFileRosterRepository::new(&path);
    repo.save(&[student(1, "Bob", true)]).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["name"], "Bob");
    assert_eq!(json[0]["course"], "React");
    assert_eq!(json[0]["grade"], 81.5);
    assert_eq!(json[0]["isPresent"], true);
}

#[test]
fn loads_roster_exported_from_browser_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.json");
    std::fs::write(
        &path,
        r#"[{"id":1,"name":"Bob","age":21,"course":"Math","grade":95,"isPresent":true},
            {"id":2,"name":"Amy","age":19,"course":"Art","grade":70,"isPresent":false}]"#,
    )
    .unwrap();

    let loaded = JsonFileRosterRepository::new(&path).load().unwrap().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].grade, 95.0);
    assert!(!loaded[1].is_present);
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.json");
    let mut repo = JsonFileRosterRepository::new(&path);
    repo.save(&[student(1, "Bob", true), student(1, "Bo", false)])
        .unwrap();

    let err = repo.load().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("duplicate")));
}

#[test]
fn malformed_json_surfaces_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = JsonFileRosterRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, RepoError::Serialization(_)));
}

#[test]
fn save_rejects_infinite_grade_without_touching_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.json");
    let mut repo = JsonFileRosterRepository::new(&path);
    let mut bad = student(1, "Bob", true);
    bad.grade = f64::INFINITY;

    let err = repo.save(&[bad]).unwrap_err();

    assert!(matches!(err, RepoError::InvalidData(_)));
    assert!(!path.exists());
    assert!(repo.load().unwrap().is_none());
}
