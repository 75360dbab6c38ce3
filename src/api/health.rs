//! Liveness and database health endpoints.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::db::DbPool;

/// Root banner response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Database health response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DbHealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service banner", body = RootResponse)
    )
)]
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        status: "ok".to_string(),
        message: "QA Test Management API is running".to_string(),
    })
}

/// Health check endpoint.
///
/// Returns 200 if the process is serving requests. Does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Database health endpoint.
///
/// Returns 200 when a trivial query round-trips, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/db",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = DbHealthResponse),
        (status = 503, description = "Database unreachable", body = DbHealthResponse)
    )
)]
#[get("/health/db")]
pub async fn health_db(pool: web::Data<DbPool>) -> HttpResponse {
    match pool.ping().await {
        Ok(()) => HttpResponse::Ok().json(DbHealthResponse {
            status: "healthy".to_string(),
            database: Some("connected".to_string()),
            error: None,
        }),
        Err(e) => {
            warn!("Database health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(DbHealthResponse {
                status: "unhealthy".to_string(),
                database: None,
                error: Some(e.to_string()),
            })
        }
    }
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root).service(health).service(health_db);
}
