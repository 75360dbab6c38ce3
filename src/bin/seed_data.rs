//! CLI tool to load a small demo data set.
//!
//! Usage:
//!   cargo run --bin seed-data
//!
//! Re-uses the demo project, user and test cases when they already exist and
//! always creates a fresh test run with one result per status.

use qa_tm_lib::config::Config;
use qa_tm_lib::db::DbPool;
use qa_tm_lib::entity::{project, user};
use qa_tm_lib::error::{AppError, AppResult};
use qa_tm_lib::models::{
    CreateProjectRequest, CreateTestCaseRequest, CreateTestResultRequest, CreateTestRunRequest,
    CreateUserRequest, TestStatus,
};
use qa_tm_lib::services;

const PROJECT_NAME: &str = "Enterprise Portal 3.0";
const USER_EMAIL: &str = "mason@example.com";
const RUN_NAME: &str = "Regression Run - Seed Data";

const TEST_CASES: [(&str, &str, &str); 4] = [
    ("Login accepts valid credentials", "Happy path login", "high"),
    ("Invalid password rejected", "Negative login", "high"),
    ("Password reset email sent", "Reset flow", "medium"),
    ("User can logout", "Session termination", "low"),
];

const RESULTS: [(TestStatus, &str); 4] = [
    (TestStatus::Pass, "OK"),
    (TestStatus::Fail, "Bug: error message wrong"),
    (TestStatus::Blocked, "Email service down"),
    (TestStatus::Skipped, "Out of scope for smoke"),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        eprintln!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = Config::from_env().map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let pool = DbPool::new(&config).await?;
    pool.run_migrations().await?;

    let project = ensure_project(&pool).await?;
    let user = ensure_user(&pool, project.id).await?;

    if pool.count_test_cases_by_project_id(project.id).await? == 0 {
        for (title, description, priority) in TEST_CASES {
            let req = CreateTestCaseRequest {
                project_id: project.id,
                title: title.to_string(),
                description: Some(description.to_string()),
                priority: priority.to_string(),
            };
            pool.insert_test_case(&req).await?;
        }
    }
    let cases = pool.get_test_cases_by_project_id(project.id).await?;

    let run = pool
        .insert_test_run(&CreateTestRunRequest {
            project_id: project.id,
            name: RUN_NAME.to_string(),
            executed_by_user_id: Some(user.id),
            environment: Some("staging".to_string()),
        })
        .await?;

    for (case, (status, notes)) in cases.iter().zip(RESULTS) {
        services::record_result(
            &pool,
            CreateTestResultRequest {
                test_run_id: run.id,
                test_case_id: case.id,
                status: status.to_string(),
                notes: Some(notes.to_string()),
            },
        )
        .await?;
    }

    println!("Seed data ready:");
    println!("  Project:    {} (id {})", project.name, project.id);
    println!("  User:       {} (id {})", user.email, user.id);
    println!(
        "  Test cases: {}",
        cases
            .iter()
            .map(|c| c.id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Test run:   {} (id {})", run.name, run.id);
    println!();
    println!("Try:");
    println!("  GET /test-runs/{}/coverage", run.id);
    println!("  GET /test-runs/{}/report", run.id);

    Ok(())
}

async fn ensure_project(pool: &DbPool) -> AppResult<project::Model> {
    if let Some(existing) = pool.get_project_by_name(PROJECT_NAME).await? {
        return Ok(existing);
    }

    pool.insert_project(&CreateProjectRequest {
        name: PROJECT_NAME.to_string(),
        description: Some("Demo project for QA test management".to_string()),
    })
    .await
}

async fn ensure_user(pool: &DbPool, project_id: i64) -> AppResult<user::Model> {
    if let Some(existing) = pool.get_user_by_email(USER_EMAIL).await? {
        return Ok(existing);
    }

    pool.insert_user(&CreateUserRequest {
        email: USER_EMAIL.to_string(),
        name: "Mason Garza".to_string(),
        role: "qa".to_string(),
        project_id: Some(project_id),
    })
    .await
}
