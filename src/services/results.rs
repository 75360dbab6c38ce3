//! Write path for test results.

use tracing::{info, warn};

use crate::db::DbPool;
use crate::entity::test_result;
use crate::error::{AppError, AppResult};
use crate::models::CreateTestResultRequest;

/// Record a result for a (test run, test case) pair.
///
/// The status is checked against the closed set before storage is touched.
/// Uniqueness of the pair is decided by the storage constraint, so a
/// concurrent duplicate still surfaces as `DuplicateResult`.
pub async fn record_result(
    pool: &DbPool,
    req: CreateTestResultRequest,
) -> AppResult<test_result::Model> {
    let new = req.into_new_result()?;

    match pool.insert_test_result(&new).await {
        Ok(stored) => {
            info!(
                "Test result recorded: id={}, run={}, case={}, status={}",
                stored.id, stored.test_run_id, stored.test_case_id, stored.status
            );
            Ok(stored)
        }
        Err(err @ AppError::DuplicateResult { .. }) => {
            warn!(
                "Duplicate result rejected: run={}, case={}",
                new.test_run_id, new.test_case_id
            );
            Err(err)
        }
        Err(err) => Err(err),
    }
}
