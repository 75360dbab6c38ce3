//! Database queries for projects.

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entity::project::{self, ActiveModel, Entity as Project};
use crate::error::{AppError, AppResult};
use crate::models::CreateProjectRequest;

use super::{DbPool, WriteViolation, write_violation};

impl DbPool {
    /// Insert a new project. Names are unique.
    pub async fn insert_project(&self, req: &CreateProjectRequest) -> AppResult<project::Model> {
        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            description: Set(req.description.clone()),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| match write_violation(&e) {
                Some(WriteViolation::Unique) => AppError::Conflict(format!(
                    "A project named '{}' already exists",
                    req.name.trim()
                )),
                _ => AppError::Database(format!("Failed to insert project: {}", e)),
            })
    }

    /// Get a project by ID.
    pub async fn get_project_by_id(&self, id: i64) -> AppResult<Option<project::Model>> {
        let result = Project::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get project: {}", e)))?;

        Ok(result)
    }

    /// Get a project by its unique name.
    pub async fn get_project_by_name(&self, name: &str) -> AppResult<Option<project::Model>> {
        let result = Project::find()
            .filter(project::Column::Name.eq(name))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get project by name: {}", e)))?;

        Ok(result)
    }

    /// Get several projects at once (batch lookup).
    pub async fn get_projects_by_ids(&self, ids: &[i64]) -> AppResult<Vec<project::Model>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let result = Project::find()
            .filter(project::Column::Id.is_in(ids.to_vec()))
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get projects: {}", e)))?;

        Ok(result)
    }

    /// List all projects in creation order.
    pub async fn list_projects(&self) -> AppResult<Vec<project::Model>> {
        let result = Project::find()
            .order_by_asc(project::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list projects: {}", e)))?;

        Ok(result)
    }
}
