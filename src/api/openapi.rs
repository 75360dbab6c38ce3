//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "QA Test Management API",
        version = "0.1.0",
        description = "Tracks test runs and results, with per-run coverage, run reports and per-case history"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::root,
        api::health::health,
        api::health::health_db,
        // Projects and users
        api::projects::create_project,
        api::projects::list_projects,
        api::users::create_user,
        api::users::list_users,
        api::users::get_user,
        // Test cases
        api::test_cases::create_test_case,
        api::test_cases::list_test_cases,
        api::test_cases::update_test_case,
        api::test_cases::delete_test_case,
        api::test_cases::get_test_case_history,
        // Test runs
        api::test_runs::create_test_run,
        api::test_runs::list_test_runs,
        api::test_runs::get_test_run_coverage,
        api::test_runs::get_test_run_report,
        // Test results
        api::test_results::create_test_result,
        api::test_results::list_test_results,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            models::TestStatus,
            models::CoverageStatus,
            // Health
            api::health::RootResponse,
            api::health::HealthResponse,
            api::health::DbHealthResponse,
            // Projects and users
            models::CreateProjectRequest,
            models::ProjectResponse,
            models::CreateUserRequest,
            models::UserResponse,
            // Test cases
            models::CreateTestCaseRequest,
            models::UpdateTestCaseRequest,
            models::TestCaseResponse,
            models::TestCaseHistory,
            models::TestCaseHistoryLine,
            // Test runs
            models::CreateTestRunRequest,
            models::TestRunResponse,
            models::TestRunCoverage,
            models::CoverageLine,
            models::TestRunReport,
            models::TestRunInfo,
            models::TestResultLine,
            // Test results
            models::CreateTestResultRequest,
            models::TestResultResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database checks"),
        (name = "Projects", description = "Projects group test cases and runs"),
        (name = "Users", description = "Testers who execute runs"),
        (name = "Test Cases", description = "Test case catalogue and execution history"),
        (name = "Test Runs", description = "Runs with coverage and report views"),
        (name = "Test Results", description = "One outcome per test case per run")
    )
)]
pub struct ApiDoc;
