//! One result per (test run, test case) pair.

use actix_web::http::StatusCode;
use qa_tm_lib::error::AppError;
use qa_tm_lib::models::CreateTestResultRequest;
use qa_tm_lib::services;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_duplicate_result_rejected() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Login").await;
    let run_id = create_test_run(&app, project_id, "Smoke", "staging").await;

    let (status, body) = record_result(&app, run_id, case_id, "pass", Some("first")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pass");
    assert_eq!(body["test_run_id"], run_id);

    let (status, body) = record_result(&app, run_id, case_id, "fail", Some("second")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "DUPLICATE_RESULT");

    let (_, report) = get_json(&app, &format!("/test-runs/{}/report", run_id)).await;
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["status"], "pass");
    assert_eq!(results[0]["notes"], "first");
}

#[actix_rt::test]
async fn test_same_case_in_another_run_allowed() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Login").await;
    let first = create_test_run(&app, project_id, "R1", "staging").await;
    let second = create_test_run(&app, project_id, "R2", "staging").await;

    let (status, _) = record_result(&app, first, case_id, "pass", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = record_result(&app, second, case_id, "pass", None).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_rt::test]
async fn test_invalid_status_rejected_without_write() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Login").await;
    let run_id = create_test_run(&app, project_id, "Smoke", "staging").await;

    let (status, body) = record_result(&app, run_id, case_id, "warn", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "INVALID_STATUS");

    let (_, coverage) = get_json(&app, &format!("/test-runs/{}/coverage", run_id)).await;
    assert_eq!(coverage["executed_cases"], 0);

    // The pair is still free after the rejected attempt.
    let (status, _) = record_result(&app, run_id, case_id, "skipped", None).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_rt::test]
async fn test_result_for_unknown_run() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Login").await;

    let (status, body) = record_result(&app, 999_999_999, case_id, "pass", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_rt::test]
async fn test_concurrent_duplicates_record_once() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Login").await;
    let run_id = create_test_run(&app, project_id, "Parallel", "staging").await;

    let request = |status: &str| CreateTestResultRequest {
        test_run_id: run_id,
        test_case_id: case_id,
        status: status.to_string(),
        notes: None,
    };

    let (first, second) = tokio::join!(
        services::record_result(&pool, request("pass")),
        services::record_result(&pool, request("fail")),
    );

    let outcomes = [first, second];
    let stored = outcomes.iter().filter(|r| r.is_ok()).count();
    let duplicates = outcomes
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(AppError::DuplicateResult { test_run_id, test_case_id })
                    if *test_run_id == run_id && *test_case_id == case_id
            )
        })
        .count();
    assert_eq!(stored, 1);
    assert_eq!(duplicates, 1);

    let (_, report) = get_json(&app, &format!("/test-runs/{}/report", run_id)).await;
    assert_eq!(report["results"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_malformed_result_body() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let (status, body) = post_raw(
        &app,
        "/test-results",
        r#"{"test_run_id": "x", "test_case_id": 1, "status": "pass"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");

    let (status, body) =
        post_raw(&app, "/test-results", r#"{"test_run_id": 1, "test_case_id": 1}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");
}
