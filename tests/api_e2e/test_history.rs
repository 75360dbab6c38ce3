//! Cross-run test case history.

use actix_web::http::StatusCode;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_history_newest_first() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Password reset email sent").await;
    let first = create_test_run(&app, project_id, "R1", "staging").await;
    let second = create_test_run(&app, project_id, "R2", "production").await;

    record_result(&app, first, case_id, "fail", Some("Email service down")).await;
    record_result(&app, second, case_id, "pass", None).await;

    let (status, body) = get_json(&app, &format!("/test-cases/{}/history", case_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["test_case_id"], case_id);
    assert_eq!(body["title"], "Password reset email sent");

    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["run_id"], second);
    assert_eq!(history[0]["run_name"], "R2");
    assert_eq!(history[0]["environment"], "production");
    assert_eq!(history[0]["status"], "pass");
    assert_eq!(history[1]["run_id"], first);
    assert_eq!(history[1]["status"], "fail");
    assert_eq!(history[1]["notes"], "Email service down");
}

#[actix_rt::test]
async fn test_history_without_results() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Untouched").await;

    let (status, body) = get_json(&app, &format!("/test-cases/{}/history", case_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["history"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_history_unknown_case() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/test-cases/999999999/history").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
