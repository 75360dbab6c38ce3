//! Test result endpoints.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{CreateTestResultRequest, TestResultResponse};
use crate::services;

/// Record the outcome of a test case within a run.
///
/// A run holds at most one result per test case; a second submission for the
/// same pair is rejected with 409 and leaves the first untouched.
#[utoipa::path(
    post,
    path = "/test-results",
    tag = "Test Results",
    request_body = CreateTestResultRequest,
    responses(
        (status = 201, description = "Result recorded", body = TestResultResponse),
        (status = 404, description = "Test run or test case not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Result already recorded for this pair", body = crate::error::ErrorResponse),
        (status = 422, description = "Status outside pass/fail/blocked/skipped", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_test_result(
    pool: web::Data<DbPool>,
    body: web::Json<CreateTestResultRequest>,
) -> AppResult<HttpResponse> {
    let stored = services::record_result(&pool, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(TestResultResponse::from(stored)))
}

/// List all test results.
#[utoipa::path(
    get,
    path = "/test-results",
    tag = "Test Results",
    responses(
        (status = 200, description = "All test results", body = Vec<TestResultResponse>)
    )
)]
pub async fn list_test_results(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let results: Vec<TestResultResponse> = pool
        .list_test_results()
        .await?
        .into_iter()
        .map(TestResultResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(results))
}

/// Configure test result routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test-results")
            .route(web::post().to(create_test_result))
            .route(web::get().to(list_test_results)),
    );
}
