//! Project DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::project;
use crate::error::AppResult;

use super::{optional_text, require_text};

/// Request body for creating a project.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    /// Unique project name (max 120 characters).
    pub name: String,
    /// Optional description (max 500 characters).
    pub description: Option<String>,
}

impl CreateProjectRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", &self.name, 120)?;
        optional_text("description", self.description.as_deref(), 500)
    }
}

/// Project as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<project::Model> for ProjectResponse {
    fn from(m: project::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}
