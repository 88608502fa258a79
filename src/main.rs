//! Demo run: seeds the sample catalogue and students, then walks through a
//! few registrations and drops against the ledger actor.

use enrollment_ledger::config::LedgerConfig;
use enrollment_ledger::lifecycle::{setup_tracing, RegistrarSystem};
use enrollment_ledger::model::{CourseCreate, StudentCreate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = LedgerConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting registrar");
    let system = RegistrarSystem::new(config);
    let client = &system.client;

    let span = tracing::info_span!("seeding");
    async {
        let courses = [
            CourseCreate::new("CS101", "Introduction to Computer Science", "Basics of CS", 30, "Mon-Wed-Fri 10:00-11:00 AM"),
            CourseCreate::new("MATH101", "Calculus I", "Introduction to Calculus", 25, "Tue-Thu 9:00-10:30 AM"),
            CourseCreate::new("ENG101", "English Literature", "Study of English Literature", 20, "Mon-Wed 1:00-2:30 PM"),
        ];
        for course in courses {
            client.add_course(course).await?;
        }
        let students = [
            StudentCreate::new("S1001", "John Doe"),
            StudentCreate::new("S1002", "Jane Smith"),
            StudentCreate::new("S1003", "Alice Johnson"),
        ];
        for student in students {
            client.add_student(student).await?;
        }
        Ok::<_, enrollment_ledger::framework::FrameworkError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    println!("{}", client.display_courses().await.map_err(|e| e.to_string())?);

    let script = [
        ("register", "S1001", "CS101"),
        ("register", "S1001", "MATH101"),
        ("register", "S1002", "CS101"),
        ("register", "S1001", "CS101"),
        ("drop", "S1002", "ENG101"),
        ("drop", "S1002", "CS101"),
        ("register", "S9999", "CS101"),
        ("register", "S1003", "BIO200"),
    ];
    for (op, id, code) in script {
        let result = match op {
            "register" => client.register(id, code).await,
            _ => client.drop_course(id, code).await,
        };
        match result {
            Ok(notice) => {
                info!(applied = notice.is_applied(), "{op} {id} {code}");
                println!("{notice}");
            }
            Err(e) => {
                warn!(error = %e, "{op} {id} {code}");
                println!("{e}");
            }
        }
    }

    for id in ["S1001", "S1002", "S9999"] {
        match client.display_student_info(id).await {
            Ok(text) => println!("{text}"),
            Err(e) => println!("{e}"),
        }
    }

    client.audit().await.map_err(|e| e.to_string())?;
    system.shutdown().await?;

    println!("Exiting the program.");
    Ok(())
}
