//! Test run endpoints: creation, coverage and report views.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{CreateTestRunRequest, TestRunCoverage, TestRunReport, TestRunResponse};
use crate::services;

/// Start a test run.
#[utoipa::path(
    post,
    path = "/test-runs",
    tag = "Test Runs",
    request_body = CreateTestRunRequest,
    responses(
        (status = 201, description = "Test run created", body = TestRunResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Project or user not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_test_run(
    pool: web::Data<DbPool>,
    body: web::Json<CreateTestRunRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let run = pool.insert_test_run(&req).await?;
    info!(
        "Test run created: id={}, project={}, name={}",
        run.id, run.project_id, run.name
    );

    Ok(HttpResponse::Created().json(TestRunResponse::from(run)))
}

/// List all test runs.
#[utoipa::path(
    get,
    path = "/test-runs",
    tag = "Test Runs",
    responses(
        (status = 200, description = "All test runs", body = Vec<TestRunResponse>)
    )
)]
pub async fn list_test_runs(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let runs: Vec<TestRunResponse> = pool
        .list_test_runs()
        .await?
        .into_iter()
        .map(TestRunResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(runs))
}

/// Coverage of the run's project test cases, including ones not yet run.
#[utoipa::path(
    get,
    path = "/test-runs/{test_run_id}/coverage",
    tag = "Test Runs",
    params(
        ("test_run_id" = i64, Path, description = "Test run ID")
    ),
    responses(
        (status = 200, description = "Run coverage", body = TestRunCoverage),
        (status = 404, description = "Test run not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_test_run_coverage(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let coverage = services::compute_coverage(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(coverage))
}

/// Every result recorded in the run.
#[utoipa::path(
    get,
    path = "/test-runs/{test_run_id}/report",
    tag = "Test Runs",
    params(
        ("test_run_id" = i64, Path, description = "Test run ID")
    ),
    responses(
        (status = 200, description = "Run report", body = TestRunReport),
        (status = 404, description = "Test run not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_test_run_report(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let report = services::build_report(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Configure test run routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test-runs")
            .route(web::post().to(create_test_run))
            .route(web::get().to(list_test_runs)),
    )
    .service(
        web::resource("/test-runs/{test_run_id}/coverage")
            .route(web::get().to(get_test_run_coverage)),
    )
    .service(
        web::resource("/test-runs/{test_run_id}/report").route(web::get().to(get_test_run_report)),
    );
}
