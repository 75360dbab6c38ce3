//! Shared test helpers for API E2E tests.

use actix_web::{App, dev::ServiceResponse, http::StatusCode, test, web};
use qa_tm_lib::config::{Config, DatabaseSettings, Environment};
use qa_tm_lib::db::DbPool;
use serde_json::{Value, json};
use tokio::sync::OnceCell;
use uuid::Uuid;

static MIGRATIONS_RUN: OnceCell<()> = OnceCell::const_new();

/// Create a fresh DB pool, or `None` when no test database is configured.
/// Migrations run only once.
pub async fn create_test_pool() -> Option<DbPool> {
    let Ok(url) = std::env::var("QATM_TEST_DATABASE_URL") else {
        eprintln!("QATM_TEST_DATABASE_URL not set, skipping API E2E test");
        return None;
    };

    let config = Config {
        environment: Environment::Development,
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseSettings {
            url,
            max_connections: 2,
            min_connections: 1,
            sql_echo: false,
        },
        cors_origins: vec![],
    };

    let pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to test database");

    MIGRATIONS_RUN
        .get_or_try_init(|| pool.run_migrations())
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Generate a unique name for test isolation.
pub fn unique_name(prefix: &str) -> String {
    format!(
        "{}-{}",
        prefix,
        Uuid::new_v4().to_string().split('-').next().unwrap()
    )
}

/// Create a test app with every API route.
pub async fn create_test_app(
    pool: &DbPool,
) -> impl actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(qa_tm_lib::api::configure_routes),
    )
    .await
}

/// POST a JSON body and return the status with the parsed response body.
pub async fn post_json<S>(app: &S, uri: &str, body: Value) -> (StatusCode, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(&body)
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// GET a URI and return the status with the parsed response body.
pub async fn get_json<S>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// Send a raw body with a JSON content type.
pub async fn post_raw<S>(app: &S, uri: &str, body: &'static str) -> (StatusCode, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// Create a project with a unique name and return its id.
pub async fn create_project<S>(app: &S) -> i64
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (status, body) = post_json(
        app,
        "/projects",
        json!({ "name": unique_name("project"), "description": "E2E" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create project: {}", body);
    body["id"].as_i64().unwrap()
}

/// Create a test case in a project and return its id.
pub async fn create_test_case<S>(app: &S, project_id: i64, title: &str) -> i64
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (status, body) = post_json(
        app,
        "/test-cases",
        json!({ "project_id": project_id, "title": title, "priority": "high" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create test case: {}", body);
    body["id"].as_i64().unwrap()
}

/// Start a test run in a project and return its id.
pub async fn create_test_run<S>(app: &S, project_id: i64, name: &str, environment: &str) -> i64
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (status, body) = post_json(
        app,
        "/test-runs",
        json!({ "project_id": project_id, "name": name, "environment": environment }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create test run: {}", body);
    body["id"].as_i64().unwrap()
}

/// Record a result and return the response status with body.
pub async fn record_result<S>(
    app: &S,
    run_id: i64,
    case_id: i64,
    status: &str,
    notes: Option<&str>,
) -> (StatusCode, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    post_json(
        app,
        "/test-results",
        json!({
            "test_run_id": run_id,
            "test_case_id": case_id,
            "status": status,
            "notes": notes,
        }),
    )
    .await
}
