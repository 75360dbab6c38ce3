//! Projects, users and test case maintenance.

use actix_web::{http::StatusCode, test};
use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_health_endpoints() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get_json(&app, "/health/db").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");
}

#[actix_rt::test]
async fn test_duplicate_project_name() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let name = unique_name("project");
    let (status, _) = post_json(&app, "/projects", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/projects", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[actix_rt::test]
async fn test_user_with_project() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let email = format!("{}@example.com", unique_name("tester"));

    let (status, body) = post_json(
        &app,
        "/users",
        json!({ "email": email, "name": "Mason Garza", "role": "qa", "project_id": project_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["project"]["id"], project_id);
    let user_id = body["id"].as_i64().unwrap();

    let (status, body) = get_json(&app, &format!("/users/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], email);

    let (status, body) = post_json(
        &app,
        "/users",
        json!({ "email": email, "name": "Someone Else", "role": "lead" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[actix_rt::test]
async fn test_test_case_defaults_and_validation() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;

    let (status, body) = post_json(
        &app,
        "/test-cases",
        json!({ "project_id": project_id, "title": "Defaults" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["priority"], "medium");
    assert_eq!(body["is_active"], true);

    let (status, body) = post_json(
        &app,
        "/test-cases",
        json!({ "project_id": project_id, "title": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");

    let (status, _) = post_json(
        &app,
        "/test-cases",
        json!({ "project_id": 999_999_999, "title": "Orphan" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_update_and_delete_test_case() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Draft").await;

    let req = test::TestRequest::put()
        .uri(&format!("/test-cases/{}", case_id))
        .set_json(json!({ "title": "Final", "is_active": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Final");
    assert_eq!(body["priority"], "high");
    assert_eq!(body["is_active"], false);

    let req = test::TestRequest::delete()
        .uri(&format!("/test-cases/{}", case_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/test-cases/{}", case_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_delete_test_case_with_results() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let app = create_test_app(&pool).await;

    let project_id = create_project(&app).await;
    let case_id = create_test_case(&app, project_id, "Executed").await;
    let run_id = create_test_run(&app, project_id, "Smoke", "staging").await;
    record_result(&app, run_id, case_id, "pass", None).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/test-cases/{}", case_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
