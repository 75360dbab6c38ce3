//! User DTOs. Role is a free-form label; nothing here depends on it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::user;
use crate::error::{AppError, AppResult};

use super::project::ProjectResponse;
use super::require_text;

/// Request body for creating a user.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Unique email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role label (e.g. "qa", "lead").
    pub role: String,
    /// Optional project association.
    pub project_id: Option<i64>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("email", &self.email, 255)?;
        require_text("name", &self.name, 100)?;
        require_text("role", &self.role, 50)?;
        validate_email(&self.email)
    }
}

/// Minimal syntactic email check: exactly one `@` with non-empty sides and a
/// dot in the domain.
fn validate_email(email: &str) -> AppResult<()> {
    let mut parts = email.trim().split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "email '{}' is not a valid address",
            email
        )))
    }
}

/// User as returned by the API, with its project inlined.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub project: Option<ProjectResponse>,
}

impl UserResponse {
    pub fn new(m: user::Model, project: Option<ProjectResponse>) -> Self {
        Self {
            id: m.id,
            email: m.email,
            name: m.name,
            role: m.role,
            project,
        }
    }
}
