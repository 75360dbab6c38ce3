//! Run report listing.

use actix_web::http::StatusCode;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_report_lists_results_with_titles() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let login = create_test_case(&app, project_id, "Login accepts valid credentials").await;
    let reset = create_test_case(&app, project_id, "Password reset email sent").await;
    create_test_case(&app, project_id, "Never executed").await;
    let run_id = create_test_run(&app, project_id, "Regression", "staging").await;

    record_result(&app, run_id, reset, "blocked", Some("Email service down")).await;
    record_result(&app, run_id, login, "pass", None).await;

    let (status, body) = get_json(&app, &format!("/test-runs/{}/report", run_id)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["run"]["id"], run_id);
    assert_eq!(body["run"]["name"], "Regression");
    assert_eq!(body["run"]["environment"], "staging");

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["test_case_id"], reset);
    assert_eq!(results[0]["test_case_title"], "Password reset email sent");
    assert_eq!(results[0]["status"], "blocked");
    assert_eq!(results[0]["notes"], "Email service down");
    assert_eq!(results[1]["test_case_title"], "Login accepts valid credentials");
}

#[actix_rt::test]
async fn test_report_unknown_run() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/test-runs/999999999/report").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_rt::test]
async fn test_result_round_trip() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "User can logout").await;
    let run_id = create_test_run(&app, project_id, "Nightly", "qa").await;

    let (status, created) =
        record_result(&app, run_id, case_id, "skipped", Some("Out of scope")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, report) = get_json(&app, &format!("/test-runs/{}/report", run_id)).await;
    let line = &report["results"][0];
    assert_eq!(line["id"], created["id"]);
    assert_eq!(line["status"], created["status"]);
    assert_eq!(line["notes"], created["notes"]);
    assert_eq!(line["created_at"], created["created_at"]);

    let (_, history) = get_json(&app, &format!("/test-cases/{}/history", case_id)).await;
    let entry = &history["history"][0];
    assert_eq!(entry["run_id"], run_id);
    assert_eq!(entry["run_name"], "Nightly");
    assert_eq!(entry["environment"], "qa");
    assert_eq!(entry["status"], "skipped");
    assert_eq!(entry["created_at"], created["created_at"]);
}
