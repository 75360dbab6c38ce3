//! Database queries for test results.
//!
//! Results are insert-only. The (test_run_id, test_case_id) pair is guarded by
//! the `uq_test_results_run_case` constraint, so concurrent writers of the same
//! pair see exactly one success.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::test_result::{self, ActiveModel, Entity as TestResult};
use crate::error::{AppError, AppResult};
use crate::models::NewTestResult;

use super::{DbPool, WriteViolation, write_violation};

impl DbPool {
    /// Insert a result. A second result for the same pair fails with
    /// `DuplicateResult`; unknown run or case ids fail with `NotFound`.
    pub async fn insert_test_result(&self, new: &NewTestResult) -> AppResult<test_result::Model> {
        let model = ActiveModel {
            test_run_id: Set(new.test_run_id),
            test_case_id: Set(new.test_case_id),
            status: Set(new.status),
            notes: Set(new.notes.clone()),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| insert_error(e, new))
    }

    /// Get all results recorded in a run, in insertion order.
    pub async fn get_test_results_by_run_id(
        &self,
        run_id: i64,
    ) -> AppResult<Vec<test_result::Model>> {
        let result = TestResult::find()
            .filter(test_result::Column::TestRunId.eq(run_id))
            .order_by_asc(test_result::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get results for run: {}", e)))?;

        Ok(result)
    }

    /// Get all results of a test case across runs, most recent first.
    pub async fn get_test_results_by_case_id(
        &self,
        case_id: i64,
    ) -> AppResult<Vec<test_result::Model>> {
        let result = TestResult::find()
            .filter(test_result::Column::TestCaseId.eq(case_id))
            .order_by_desc(test_result::Column::CreatedAt)
            .order_by_desc(test_result::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get results for case: {}", e)))?;

        Ok(result)
    }

    /// List all results in insertion order.
    pub async fn list_test_results(&self) -> AppResult<Vec<test_result::Model>> {
        let result = TestResult::find()
            .order_by_asc(test_result::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test results: {}", e)))?;

        Ok(result)
    }
}

fn insert_error(err: DbErr, new: &NewTestResult) -> AppError {
    match write_violation(&err) {
        Some(WriteViolation::Unique) => AppError::DuplicateResult {
            test_run_id: new.test_run_id,
            test_case_id: new.test_case_id,
        },
        Some(WriteViolation::ForeignKey) => AppError::NotFound(format!(
            "Test run {} or test case {}",
            new.test_run_id, new.test_case_id
        )),
        None => AppError::Database(format!("Failed to insert test result: {}", err)),
    }
}
