use enrollment_ledger::config::{DuplicatePolicy, LedgerConfig};
use enrollment_ledger::framework::{FrameworkError, LedgerActor};
use enrollment_ledger::lifecycle::RegistrarSystem;
use enrollment_ledger::model::{CourseCreate, StudentCreate, StudentId};
use enrollment_ledger::LedgerError;

/// Full end-to-end run through the spawned actor.
#[tokio::test]
async fn test_registrar_system_end_to_end() {
    let system = RegistrarSystem::new(LedgerConfig::default());
    let client = system.client.clone();

    client
        .add_course(CourseCreate::new("CS101", "Introduction to Computer Science", "Basics of CS", 30, "MWF"))
        .await
        .expect("Failed to add course");
    client
        .add_student(StudentCreate::new("S1001", "John Doe"))
        .await
        .expect("Failed to add student");

    let notice = client.register("S1001", "CS101").await.expect("Failed to register");
    assert!(notice.is_applied());

    let course = client
        .get_course("CS101")
        .await
        .expect("Failed to get course")
        .expect("Course not found");
    assert_eq!(course.available_slots(), 29);

    let student = client
        .get_student("S1001")
        .await
        .expect("Failed to get student")
        .expect("Student not found");
    assert_eq!(student.registered_courses()[0].title, "Introduction to Computer Science");

    let info = client.display_student_info("S1001").await.unwrap();
    assert_eq!(
        info,
        "Student ID: S1001\nName: John Doe\nRegistered Courses:\nIntroduction to Computer Science (CS101)\n"
    );

    let err = client.display_student_info("S9999").await.unwrap_err();
    assert_eq!(
        err,
        FrameworkError::Ledger(LedgerError::StudentNotFound(StudentId::from("S9999")))
    );
    assert!(client.get_student("S9999").await.unwrap().is_none());

    client.drop_course("S1001", "CS101").await.unwrap();
    assert_eq!(client.get_course("CS101").await.unwrap().unwrap().enrolled(), 0);
    client.audit().await.expect("Ledger should be consistent");

    drop(client);
    system.shutdown().await.expect("Failed to shutdown system");
}

/// Many tasks race for a capacity-bounded course; the actor serializes them.
#[tokio::test]
async fn test_concurrent_registrations_respect_capacity() {
    let system = RegistrarSystem::new(LedgerConfig::default());
    system
        .client
        .add_course(CourseCreate::new("SEM1", "Seminar", "Limited", 5, "Fri"))
        .await
        .unwrap();
    for i in 0..20 {
        system
            .client
            .add_student(StudentCreate::new(format!("S{}", 2000 + i), format!("Student {i}")))
            .await
            .unwrap();
    }

    let mut handles = vec![];
    for i in 0..20 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            client.register(format!("S{}", 2000 + i), "SEM1").await
        }));
    }

    let mut applied = 0;
    let mut skipped = 0;
    for handle in handles {
        let notice = handle.await.unwrap().expect("Every student exists");
        if notice.is_applied() {
            applied += 1;
        } else {
            skipped += 1;
        }
    }

    assert_eq!(applied, 5, "Exactly capacity registrations should apply");
    assert_eq!(skipped, 15);

    let course = system.client.get_course("SEM1").await.unwrap().unwrap();
    assert_eq!(course.enrolled(), 5);
    assert!(course.is_full());
    assert_eq!(system.client.roster("SEM1").await.unwrap().len(), 5);
    system.client.audit().await.unwrap();

    system.shutdown().await.unwrap();
}

/// Concurrent register/drop churn never breaks the relationship invariant.
#[tokio::test]
async fn test_concurrent_churn_stays_consistent() {
    let system = RegistrarSystem::new(LedgerConfig::default());
    system
        .client
        .add_course(CourseCreate::new("CS101", "Intro", "d", 3, "MWF"))
        .await
        .unwrap();
    for i in 0..6 {
        system
            .client
            .add_student(StudentCreate::new(format!("S{i}"), format!("Student {i}")))
            .await
            .unwrap();
    }

    let mut handles = vec![];
    for i in 0..6 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            for round in 0..25 {
                let id = format!("S{i}");
                if (i + round) % 2 == 0 {
                    client.register(id, "CS101").await?;
                } else {
                    client.drop_course(id, "CS101").await?;
                }
            }
            Ok::<_, FrameworkError>(())
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    system.client.audit().await.expect("Ledger should be consistent");
    let course = system.client.get_course("CS101").await.unwrap().unwrap();
    assert!(course.enrolled() <= 3);
    assert_eq!(
        system.client.roster("CS101").await.unwrap().len() as u32,
        course.enrolled()
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reject_policy_through_actor() {
    let config = LedgerConfig {
        duplicate_policy: DuplicatePolicy::Reject,
        ..LedgerConfig::default()
    };
    let (actor, client) = LedgerActor::new(config);
    let handle = tokio::spawn(actor.run());

    client
        .add_course(CourseCreate::new("CS101", "Intro", "d", 30, "MWF"))
        .await
        .unwrap();
    let err = client
        .add_course(CourseCreate::new("CS101", "Other", "d", 5, "TTh"))
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::Ledger(LedgerError::DuplicateCourse(_))));

    let listed = client.list_courses().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title(), "Intro");
    assert!(client
        .display_courses()
        .await
        .unwrap()
        .starts_with("Available Courses:\nCourse Code: CS101\n"));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_requests_after_shutdown_fail_closed() {
    let (actor, client) = LedgerActor::new(LedgerConfig::default());
    let handle = tokio::spawn(actor.run());
    let survivor = client.clone();

    handle.abort();
    let _ = handle.await;

    let err = survivor.list_courses().await.unwrap_err();
    assert!(matches!(
        err,
        FrameworkError::ActorClosed | FrameworkError::ActorDropped
    ));
    drop(client);
}
