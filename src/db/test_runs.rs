//! Database queries for test runs.

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entity::test_run::{self, ActiveModel, Entity as TestRun};
use crate::error::{AppError, AppResult};
use crate::models::CreateTestRunRequest;

use super::{DbPool, WriteViolation, write_violation};

impl DbPool {
    /// Insert a new test run. `started_at` is assigned by the database.
    pub async fn insert_test_run(&self, req: &CreateTestRunRequest) -> AppResult<test_run::Model> {
        let model = ActiveModel {
            project_id: Set(req.project_id),
            executed_by_user_id: Set(req.executed_by_user_id),
            name: Set(req.name.trim().to_string()),
            completed_at: Set(None),
            environment: Set(req.environment.clone()),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| match write_violation(&e) {
                Some(WriteViolation::ForeignKey) => AppError::NotFound(match req.executed_by_user_id
                {
                    Some(user_id) => format!("Project {} or user {}", req.project_id, user_id),
                    None => format!("Project {}", req.project_id),
                }),
                _ => AppError::Database(format!("Failed to insert test run: {}", e)),
            })
    }

    /// Get a test run by ID.
    pub async fn get_test_run_by_id(&self, id: i64) -> AppResult<Option<test_run::Model>> {
        let result = TestRun::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test run: {}", e)))?;

        Ok(result)
    }

    /// Get several test runs at once (batch lookup).
    pub async fn get_test_runs_by_ids(&self, ids: &[i64]) -> AppResult<Vec<test_run::Model>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let result = TestRun::find()
            .filter(test_run::Column::Id.is_in(ids.to_vec()))
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test runs: {}", e)))?;

        Ok(result)
    }

    /// List all test runs in creation order.
    pub async fn list_test_runs(&self) -> AppResult<Vec<test_run::Model>> {
        let result = TestRun::find()
            .order_by_asc(test_run::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test runs: {}", e)))?;

        Ok(result)
    }
}
