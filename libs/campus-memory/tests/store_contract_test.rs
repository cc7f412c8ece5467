//! Port contract tests for `InMemoryStore`
//!
//! The domain relies on the store to reject duplicate keys atomically and to
//! report missing rows on update; these tests pin that behaviour down.

use std::sync::Arc;

use campus_domain::{
    CampusError, CourseId, CourseInput, CourseRepository, EnrollmentRepository, EnrollmentStatus,
    EntityKind, NewEnrollment, NewStudent, StudentId, StudentRepository,
};
use campus_memory::InMemoryStore;
use chrono::NaiveDate;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

fn new_student(email: &str) -> NewStudent {
    NewStudent {
        first_name: "Edsger".to_string(),
        last_name: "Dijkstra".to_string(),
        email: email.to_string(),
        phone: "5550000000".to_string(),
        date_of_birth: None,
        address: None,
        enrollment_date: day(),
    }
}

/// Insert `students` students and `courses` courses, ids 1..=n in order
async fn seed(store: &InMemoryStore, students: usize, courses: usize) {
    for n in 1..=students {
        store
            .insert_student(new_student(&format!("s{n}@x.com")))
            .await
            .unwrap();
    }
    for n in 1..=courses {
        store
            .insert_course(course_input(&format!("AL{:03}", 100 + n)))
            .await
            .unwrap();
    }
}

fn course_input(code: &str) -> CourseInput {
    CourseInput {
        name: "Algorithms".to_string(),
        code: code.to_string(),
        credits: 4,
        instructor: "Dr. Tarjan".to_string(),
        description: Some("Graphs and more".to_string()),
    }
}

#[tokio::test]
async fn test_ids_come_from_per_table_sequences() {
    let store = InMemoryStore::new();

    let s1 = store.insert_student(new_student("a@x.com")).await.unwrap();
    let s2 = store.insert_student(new_student("b@x.com")).await.unwrap();
    let c1 = store.insert_course(course_input("AL101")).await.unwrap();

    assert_eq!(s1.id(), StudentId::new(1));
    assert_eq!(s2.id(), StudentId::new(2));
    assert_eq!(c1.id(), CourseId::new(1));

    store.delete_student(s2.id()).await.unwrap();
    let s3 = store.insert_student(new_student("c@x.com")).await.unwrap();
    assert_eq!(s3.id(), StudentId::new(3));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_inserts_admit_exactly_one() {
    let store = Arc::new(InMemoryStore::new());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.insert_student(new_student("race@x.com")).await })
        })
        .collect();

    let mut admitted = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => admitted += 1,
            Err(CampusError::Conflict(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(admitted, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(store.list_students().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_pair_rejected_by_store() {
    let store = InMemoryStore::new();
    seed(&store, 1, 1).await;
    let pair = NewEnrollment::active(StudentId::new(1), CourseId::new(1), day());

    store.insert_enrollment(pair.clone()).await.unwrap();
    let err = store.insert_enrollment(pair).await.unwrap_err();
    assert!(matches!(err, CampusError::Conflict(_)));
}

#[tokio::test]
async fn test_update_missing_rows_is_not_found() {
    let store = InMemoryStore::new();
    let student = store.insert_student(new_student("a@x.com")).await.unwrap();
    let course = store.insert_course(course_input("AL101")).await.unwrap();
    let enrollment = store
        .insert_enrollment(NewEnrollment::active(student.id(), course.id(), day()))
        .await
        .unwrap();

    store.delete_student(student.id()).await.unwrap();
    store.delete_course(course.id()).await.unwrap();
    store.delete_enrollment(enrollment.id()).await.unwrap();

    assert!(matches!(
        store.update_student(&student).await,
        Err(CampusError::NotFound { .. })
    ));
    assert!(matches!(
        store.update_course(&course).await,
        Err(CampusError::NotFound { .. })
    ));
    assert!(matches!(
        store.update_enrollment(&enrollment).await,
        Err(CampusError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_rejects_key_taken_by_another_row() {
    let store = InMemoryStore::new();
    store.insert_course(course_input("AL101")).await.unwrap();
    let mut second = store.insert_course(course_input("AL102")).await.unwrap();

    second.apply(course_input("AL101"));
    let err = store.update_course(&second).await.unwrap_err();
    assert!(matches!(err, CampusError::Conflict(_)));

    // Re-saving a row with its own key is an ordinary update.
    second.apply(course_input("AL102"));
    store.update_course(&second).await.unwrap();
}

#[tokio::test]
async fn test_bulk_delete_reports_removed_rows() {
    let store = InMemoryStore::new();
    seed(&store, 2, 3).await;
    for course in 1..=3 {
        store
            .insert_enrollment(NewEnrollment::active(
                StudentId::new(1),
                CourseId::new(course),
                day(),
            ))
            .await
            .unwrap();
    }
    store
        .insert_enrollment(NewEnrollment::active(StudentId::new(2), CourseId::new(1), day()))
        .await
        .unwrap();

    assert_eq!(store.count_by_course(CourseId::new(1)).await.unwrap(), 2);
    assert_eq!(store.delete_enrollments_by_student(StudentId::new(1)).await.unwrap(), 3);
    assert_eq!(store.delete_enrollments_by_student(StudentId::new(1)).await.unwrap(), 0);
    assert_eq!(store.delete_enrollments_by_course(CourseId::new(1)).await.unwrap(), 1);
    assert!(store.list_enrollments().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_enrollment_filters() {
    let store = InMemoryStore::new();
    seed(&store, 2, 2).await;
    let mut first = store
        .insert_enrollment(NewEnrollment::active(StudentId::new(1), CourseId::new(1), day()))
        .await
        .unwrap();
    store
        .insert_enrollment(NewEnrollment::active(StudentId::new(1), CourseId::new(2), day()))
        .await
        .unwrap();

    first.set_status(EnrollmentStatus::Completed);
    first.set_grade("B+");
    store.update_enrollment(&first).await.unwrap();

    let active = store
        .enrollments_by_student(StudentId::new(1), Some(EnrollmentStatus::Active))
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].course_id(), CourseId::new(2));

    let all = store
        .enrollments_by_student(StudentId::new(1), None)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let stored = store.find_enrollment(first.id()).await.unwrap().unwrap();
    assert_eq!(stored.grade(), Some("B+"));
    assert!(store.enrollment_exists(first.id()).await.unwrap());
    assert!(store
        .find_enrollment_by_pair(StudentId::new(2), CourseId::new(1))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_insert_enrollment_requires_live_parents() {
    let store = InMemoryStore::new();
    seed(&store, 1, 1).await;

    let err = store
        .insert_enrollment(NewEnrollment::active(StudentId::new(7), CourseId::new(8), day()))
        .await
        .unwrap_err();
    assert!(matches!(err, CampusError::NotFound { entity: EntityKind::Student, .. }));

    let err = store
        .insert_enrollment(NewEnrollment::active(StudentId::new(1), CourseId::new(8), day()))
        .await
        .unwrap_err();
    assert!(matches!(err, CampusError::NotFound { entity: EntityKind::Course, .. }));

    // A parent deleted after the caller looked it up is still refused.
    store.delete_enrollments_by_student(StudentId::new(1)).await.unwrap();
    store.delete_student(StudentId::new(1)).await.unwrap();
    let err = store
        .insert_enrollment(NewEnrollment::active(StudentId::new(1), CourseId::new(1), day()))
        .await
        .unwrap_err();
    assert!(matches!(err, CampusError::NotFound { entity: EntityKind::Student, .. }));
    assert!(store.list_enrollments().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cascade_racing_enrollments_leaves_no_orphans() {
    for _ in 0..50 {
        let store = Arc::new(InMemoryStore::new());
        seed(&store, 1, 8).await;

        let enrolls: Vec<_> = (1..=8)
            .map(|course| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert_enrollment(NewEnrollment::active(
                            StudentId::new(1),
                            CourseId::new(course),
                            day(),
                        ))
                        .await
                })
            })
            .collect();

        let cascade = {
            let store = store.clone();
            tokio::spawn(async move {
                store.delete_enrollments_by_student(StudentId::new(1)).await?;
                store.delete_student(StudentId::new(1)).await
            })
        };

        for handle in enrolls {
            match handle.await.unwrap() {
                Ok(_) | Err(CampusError::NotFound { .. }) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        cascade.await.unwrap().unwrap();

        let orphans = store
            .enrollments_by_student(StudentId::new(1), None)
            .await
            .unwrap();
        assert!(orphans.is_empty(), "orphaned enrollments: {orphans:?}");
    }
}
