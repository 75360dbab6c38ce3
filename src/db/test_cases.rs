//! Database queries for test cases.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::test_case::{self, ActiveModel, Entity as TestCase};
use crate::error::{AppError, AppResult};
use crate::models::{CreateTestCaseRequest, UpdateTestCaseRequest};

use super::{DbPool, WriteViolation, write_violation};

impl DbPool {
    /// Insert a new test case. New cases are active.
    pub async fn insert_test_case(
        &self,
        req: &CreateTestCaseRequest,
    ) -> AppResult<test_case::Model> {
        let model = ActiveModel {
            project_id: Set(req.project_id),
            title: Set(req.title.trim().to_string()),
            description: Set(req.description.clone()),
            priority: Set(req.priority.trim().to_string()),
            is_active: Set(true),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| match write_violation(&e) {
                Some(WriteViolation::ForeignKey) => {
                    AppError::NotFound(format!("Project {}", req.project_id))
                }
                _ => AppError::Database(format!("Failed to insert test case: {}", e)),
            })
    }

    /// Get a test case by ID.
    pub async fn get_test_case_by_id(&self, id: i64) -> AppResult<Option<test_case::Model>> {
        let result = TestCase::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test case: {}", e)))?;

        Ok(result)
    }

    /// Get all test cases of a project in creation order.
    pub async fn get_test_cases_by_project_id(
        &self,
        project_id: i64,
    ) -> AppResult<Vec<test_case::Model>> {
        let result = TestCase::find()
            .filter(test_case::Column::ProjectId.eq(project_id))
            .order_by_asc(test_case::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to get test cases for project: {}", e))
            })?;

        Ok(result)
    }

    /// Get several test cases at once (batch lookup).
    pub async fn get_test_cases_by_ids(&self, ids: &[i64]) -> AppResult<Vec<test_case::Model>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let result = TestCase::find()
            .filter(test_case::Column::Id.is_in(ids.to_vec()))
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test cases: {}", e)))?;

        Ok(result)
    }

    /// Count the test cases of a project.
    pub async fn count_test_cases_by_project_id(&self, project_id: i64) -> AppResult<u64> {
        let count = TestCase::find()
            .filter(test_case::Column::ProjectId.eq(project_id))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count test cases: {}", e)))?;

        Ok(count)
    }

    /// List all test cases in creation order.
    pub async fn list_test_cases(&self) -> AppResult<Vec<test_case::Model>> {
        let result = TestCase::find()
            .order_by_asc(test_case::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test cases: {}", e)))?;

        Ok(result)
    }

    /// Apply a partial update to a test case.
    pub async fn update_test_case(
        &self,
        id: i64,
        update: &UpdateTestCaseRequest,
    ) -> AppResult<test_case::Model> {
        let test_case = self
            .get_test_case_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Test case {}", id)))?;

        let mut active: ActiveModel = test_case.into();
        if let Some(ref title) = update.title {
            active.title = Set(title.trim().to_string());
        }
        if let Some(ref description) = update.description {
            active.description = Set(description.clone());
        }
        if let Some(ref priority) = update.priority {
            active.priority = Set(priority.trim().to_string());
        }
        if let Some(is_active) = update.is_active {
            active.is_active = Set(is_active);
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update test case: {}", e)))?;

        Ok(result)
    }

    /// Delete a test case. Fails while results still reference it.
    pub async fn delete_test_case(&self, id: i64) -> AppResult<()> {
        let result = TestCase::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| match write_violation(&e) {
                Some(WriteViolation::ForeignKey) => AppError::Conflict(format!(
                    "Test case {} has recorded results and cannot be deleted",
                    id
                )),
                _ => AppError::Database(format!("Failed to delete test case: {}", e)),
            })?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Test case {}", id)));
        }

        Ok(())
    }
}
