//! User endpoints.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::entity::{project, user};
use crate::error::{AppError, AppResult};
use crate::models::{CreateUserRequest, ProjectResponse, UserResponse};
use crate::services::distinct_ids;

/// Pair each user with its project, when it has one.
fn with_projects(users: Vec<user::Model>, projects: Vec<project::Model>) -> Vec<UserResponse> {
    let projects: HashMap<i64, project::Model> = projects.into_iter().map(|p| (p.id, p)).collect();

    users
        .into_iter()
        .map(|u| {
            let project = u
                .project_id
                .and_then(|id| projects.get(&id).cloned())
                .map(ProjectResponse::from);
            UserResponse::new(u, project)
        })
        .collect()
}

async fn load_user_responses(
    pool: &DbPool,
    users: Vec<user::Model>,
) -> AppResult<Vec<UserResponse>> {
    let project_ids = distinct_ids(users.iter().filter_map(|u| u.project_id));

    let projects = pool.get_projects_by_ids(&project_ids).await?;
    Ok(with_projects(users, projects))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Project not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    pool: web::Data<DbPool>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let user = pool.insert_user(&req).await?;
    info!("User created: id={}, email={}", user.id, user.email);

    let mut responses = load_user_responses(&pool, vec![user]).await?;
    let response = responses
        .pop()
        .ok_or_else(|| AppError::Database("Created user vanished".to_string()))?;

    Ok(HttpResponse::Created().json(response))
}

/// List all users with their projects.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let users = pool.list_users().await?;
    let responses = load_user_responses(&pool, users).await?;

    Ok(HttpResponse::Ok().json(responses))
}

/// Get a single user.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(pool: web::Data<DbPool>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let user = pool
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))?;

    let project = match user.project_id {
        Some(id) => pool.get_project_by_id(id).await?.map(ProjectResponse::from),
        None => None,
    };

    Ok(HttpResponse::Ok().json(UserResponse::new(user, project)))
}

/// Configure user routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::post().to(create_user))
            .route(web::get().to(list_users)),
    )
    .service(web::resource("/users/{user_id}").route(web::get().to(get_user)));
}
