//! Test case endpoints, including cross-run history.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CreateTestCaseRequest, TestCaseHistory, TestCaseResponse, UpdateTestCaseRequest,
};
use crate::services;

/// Create a test case.
#[utoipa::path(
    post,
    path = "/test-cases",
    tag = "Test Cases",
    request_body = CreateTestCaseRequest,
    responses(
        (status = 201, description = "Test case created", body = TestCaseResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Project not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_test_case(
    pool: web::Data<DbPool>,
    body: web::Json<CreateTestCaseRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let test_case = pool.insert_test_case(&req).await?;
    info!(
        "Test case created: id={}, project={}",
        test_case.id, test_case.project_id
    );

    Ok(HttpResponse::Created().json(TestCaseResponse::from(test_case)))
}

/// List all test cases.
#[utoipa::path(
    get,
    path = "/test-cases",
    tag = "Test Cases",
    responses(
        (status = 200, description = "All test cases", body = Vec<TestCaseResponse>)
    )
)]
pub async fn list_test_cases(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let cases: Vec<TestCaseResponse> = pool
        .list_test_cases()
        .await?
        .into_iter()
        .map(TestCaseResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(cases))
}

/// Partially update a test case.
#[utoipa::path(
    put,
    path = "/test-cases/{test_case_id}",
    tag = "Test Cases",
    params(
        ("test_case_id" = i64, Path, description = "Test case ID")
    ),
    request_body = UpdateTestCaseRequest,
    responses(
        (status = 200, description = "Test case updated", body = TestCaseResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Test case not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_test_case(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<UpdateTestCaseRequest>,
) -> AppResult<HttpResponse> {
    let test_case_id = path.into_inner();
    let update = body.into_inner();
    update.validate()?;

    let test_case = pool.update_test_case(test_case_id, &update).await?;
    info!("Test case updated: id={}", test_case.id);

    Ok(HttpResponse::Ok().json(TestCaseResponse::from(test_case)))
}

/// Delete a test case that has no recorded results.
#[utoipa::path(
    delete,
    path = "/test-cases/{test_case_id}",
    tag = "Test Cases",
    params(
        ("test_case_id" = i64, Path, description = "Test case ID")
    ),
    responses(
        (status = 204, description = "Test case deleted"),
        (status = 404, description = "Test case not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Test case has recorded results", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_test_case(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let test_case_id = path.into_inner();
    pool.delete_test_case(test_case_id).await?;
    info!("Test case deleted: id={}", test_case_id);

    Ok(HttpResponse::NoContent().finish())
}

/// Execution history of a test case across all runs, newest first.
#[utoipa::path(
    get,
    path = "/test-cases/{test_case_id}/history",
    tag = "Test Cases",
    params(
        ("test_case_id" = i64, Path, description = "Test case ID")
    ),
    responses(
        (status = 200, description = "Test case history", body = TestCaseHistory),
        (status = 404, description = "Test case not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_test_case_history(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let history = services::build_history(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(history))
}

/// Configure test case routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test-cases")
            .route(web::post().to(create_test_case))
            .route(web::get().to(list_test_cases)),
    )
    .service(
        web::resource("/test-cases/{test_case_id}")
            .route(web::put().to(update_test_case))
            .route(web::delete().to(delete_test_case)),
    )
    .service(
        web::resource("/test-cases/{test_case_id}/history")
            .route(web::get().to(get_test_case_history)),
    );
}
