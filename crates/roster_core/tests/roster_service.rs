use roster_core::{
    default_students, FormField, MemoryRosterRepository, Query, RepoError, RosterService,
    ServiceError, SortKey, StatusFilter, Student, StudentDraft, StudentForm,
};

fn bob_and_amy() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            name: "Bob".to_string(),
            age: 21,
            course: "Math".to_string(),
            grade: 95.0,
            is_present: true,
        },
        Student {
            id: 2,
            name: "Amy".to_string(),
            age: 19,
            course: "Art".to_string(),
            grade: 70.0,
            is_present: false,
        },
    ]
}

#[test]
fn start_restores_saved_roster_without_resaving() {
    let repo = MemoryRosterRepository::with_students(bob_and_amy());
    let service = RosterService::start(repo).unwrap();

    assert_eq!(&*service.snapshot(), bob_and_amy().as_slice());
    assert_eq!(service.repository().save_count(), 0);
}

#[test]
fn start_seeds_default_roster_when_nothing_saved() {
    let service = RosterService::start(MemoryRosterRepository::new()).unwrap();

    assert_eq!(&*service.snapshot(), default_students().as_slice());
    assert_eq!(
        service.repository().stored(),
        Some(default_students().as_slice())
    );
}

#[test]
fn every_mutation_is_persisted() {
    let repo = MemoryRosterRepository::with_students(bob_and_amy());
    let mut service = RosterService::start(repo).unwrap();

    service.add_student(StudentDraft::new("Cid", 20, "Math", 88.0, true));
    service.toggle_status(2);
    service.remove_student(1);

    let repo = service.into_repository();
    assert_eq!(repo.save_count(), 3);
    let stored = repo.stored().unwrap();
    assert_eq!(
        stored.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![2, 3]
    );
    assert!(stored[0].is_present);
}

#[test]
fn add_from_form_validates_then_adds_and_resets() {
    let mut service =
        RosterService::start(MemoryRosterRepository::with_students(bob_and_amy())).unwrap();
    let mut form = StudentForm::new();
    form.set(FormField::Name, "Cid");
    form.set(FormField::Age, "20");
    form.set(FormField::Course, "Math");
    form.set(FormField::Grade, "88");
    form.is_present = true;

    let snapshot = service.add_from_form(&mut form).unwrap();

    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[2].id, 3);
    assert_eq!(form, StudentForm::new());
}

#[test]
fn add_from_form_rejects_blank_fields_and_keeps_roster() {
    let mut service =
        RosterService::start(MemoryRosterRepository::with_students(bob_and_amy())).unwrap();
    let mut form = StudentForm::new();
    form.set(FormField::Name, "   ");
    form.set(FormField::Age, "20");

    let err = service.add_from_form(&mut form).unwrap_err();

    match err {
        ServiceError::Form(errors) => {
            assert!(errors.get(FormField::Name).is_some());
            assert!(errors.get(FormField::Course).is_some());
            assert!(errors.get(FormField::Grade).is_some());
            assert!(errors.get(FormField::Age).is_none());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.snapshot().len(), 2);
    assert_eq!(service.repository().save_count(), 0);
    assert!(form.errors().get(FormField::Name).is_some());
}

#[test]
fn failed_save_keeps_mutation_and_reports_error_once() {
    let repo = MemoryRosterRepository::with_students(bob_and_amy()).fail_saves();
    let mut service = RosterService::start(repo).unwrap();

    let snapshot = service.toggle_status(2);

    assert!(snapshot[1].is_present);
    assert!(matches!(service.take_save_error(), Some(RepoError::Io(_))));
    assert!(service.take_save_error().is_none());
}

#[test]
fn save_error_survives_a_later_successful_save() {
    let repo = MemoryRosterRepository::with_students(bob_and_amy()).fail_next_saves(1);
    let mut service = RosterService::start(repo).unwrap();

    service.toggle_status(1);
    service.add_student(StudentDraft::new("Cid", 22, "Bio", 81.0, true));

    assert_eq!(service.repository().save_count(), 1);
    assert_eq!(service.repository().stored().unwrap().len(), 3);
    assert!(matches!(service.take_save_error(), Some(RepoError::Io(_))));
    assert!(service.take_save_error().is_none());
}

#[test]
fn project_uses_current_snapshot() {
    let mut service =
        RosterService::start(MemoryRosterRepository::with_students(bob_and_amy())).unwrap();
    service.toggle_status(2);

    let projection = service.project(
        &Query::new()
            .status(StatusFilter::Present)
            .sort_by(SortKey::Name),
    );

    assert_eq!(
        projection.rows.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![2, 1]
    );
    assert_eq!(projection.stats.present, 2);
    assert_eq!(projection.stats.absent, 0);
}
