//! Test result DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::test_result;
use crate::error::AppResult;

use super::TestStatus;

/// Request body for recording a result.
///
/// `status` is kept as raw text here so that values outside the closed set
/// are reported as `INVALID_STATUS` (422) rather than a JSON decoding error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTestResultRequest {
    pub test_run_id: i64,
    pub test_case_id: i64,
    /// One of: pass, fail, blocked, skipped.
    #[schema(value_type = TestStatus)]
    pub status: String,
    pub notes: Option<String>,
}

impl CreateTestResultRequest {
    /// Parse the status into the closed set.
    pub fn into_new_result(self) -> AppResult<NewTestResult> {
        let status = self.status.parse::<TestStatus>()?;
        Ok(NewTestResult {
            test_run_id: self.test_run_id,
            test_case_id: self.test_case_id,
            status,
            notes: self.notes,
        })
    }
}

/// A result ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestResult {
    pub test_run_id: i64,
    pub test_case_id: i64,
    pub status: TestStatus,
    pub notes: Option<String>,
}

/// Stored test result as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestResultResponse {
    pub id: i64,
    pub test_run_id: i64,
    pub test_case_id: i64,
    pub status: TestStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<test_result::Model> for TestResultResponse {
    fn from(m: test_result::Model) -> Self {
        Self {
            id: m.id,
            test_run_id: m.test_run_id,
            test_case_id: m.test_case_id,
            status: m.status,
            notes: m.notes,
            created_at: m.created_at,
        }
    }
}
