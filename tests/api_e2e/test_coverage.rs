//! Run coverage over the project's test cases.

use actix_web::http::StatusCode;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_partial_run_coverage() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let login = create_test_case(&app, project_id, "Login").await;
    let logout = create_test_case(&app, project_id, "Logout").await;
    let reset = create_test_case(&app, project_id, "Reset password").await;
    let run_id = create_test_run(&app, project_id, "Smoke", "staging").await;

    let (status, _) = record_result(&app, run_id, login, "pass", Some("OK")).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = record_result(&app, run_id, logout, "fail", None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get_json(&app, &format!("/test-runs/{}/coverage", run_id)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["run_id"], run_id);
    assert_eq!(body["project_id"], project_id);
    assert_eq!(body["total_cases"], 3);
    assert_eq!(body["executed_cases"], 2);
    assert_eq!(body["not_run_cases"], 1);
    assert_eq!(body["pass_count"], 1);
    assert_eq!(body["fail_count"], 1);
    assert_eq!(body["blocked_count"], 0);
    assert_eq!(body["skipped_count"], 0);
    assert_eq!(body["pass_rate"].as_f64(), Some(0.5));

    let lines = body["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["test_case_id"], login);
    assert_eq!(lines[0]["status"], "pass");
    assert_eq!(lines[0]["notes"], "OK");
    assert_eq!(lines[1]["test_case_id"], logout);
    assert_eq!(lines[1]["status"], "fail");
    assert_eq!(lines[2]["test_case_id"], reset);
    assert_eq!(lines[2]["status"], "not_run");
    assert!(lines[2]["notes"].is_null());
}

#[actix_rt::test]
async fn test_empty_run_has_no_pass_rate() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    create_test_case(&app, project_id, "Login").await;
    create_test_case(&app, project_id, "Logout").await;
    let run_id = create_test_run(&app, project_id, "Empty", "staging").await;

    let (status, body) = get_json(&app, &format!("/test-runs/{}/coverage", run_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_cases"], 2);
    assert_eq!(body["executed_cases"], 0);
    assert_eq!(body["not_run_cases"], 2);
    assert!(body["pass_rate"].is_null());
}

#[actix_rt::test]
async fn test_coverage_unknown_run() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/test-runs/999999999/coverage").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_rt::test]
async fn test_coverage_non_numeric_run_id() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/test-runs/abc/coverage").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");
}
