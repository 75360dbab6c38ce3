//! Database queries for users.

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entity::user::{self, ActiveModel, Entity as User};
use crate::error::{AppError, AppResult};
use crate::models::CreateUserRequest;

use super::{DbPool, WriteViolation, write_violation};

impl DbPool {
    /// Insert a new user. Emails are unique.
    pub async fn insert_user(&self, req: &CreateUserRequest) -> AppResult<user::Model> {
        let email = req.email.trim().to_string();

        let model = ActiveModel {
            project_id: Set(req.project_id),
            email: Set(email.clone()),
            name: Set(req.name.trim().to_string()),
            role: Set(req.role.trim().to_string()),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| match write_violation(&e) {
                Some(WriteViolation::Unique) => {
                    AppError::Conflict(format!("A user with email '{}' already exists", email))
                }
                Some(WriteViolation::ForeignKey) => AppError::NotFound(format!(
                    "Project {}",
                    req.project_id.unwrap_or_default()
                )),
                None => AppError::Database(format!("Failed to insert user: {}", e)),
            })
    }

    /// Get a user by ID.
    pub async fn get_user_by_id(&self, id: i64) -> AppResult<Option<user::Model>> {
        let result = User::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get user: {}", e)))?;

        Ok(result)
    }

    /// Get a user by email.
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        let result = User::find()
            .filter(user::Column::Email.eq(email))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get user by email: {}", e)))?;

        Ok(result)
    }

    /// List all users in creation order.
    pub async fn list_users(&self) -> AppResult<Vec<user::Model>> {
        let result = User::find()
            .order_by_asc(user::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list users: {}", e)))?;

        Ok(result)
    }
}
