//! Cross-run history of a single test case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TestStatus;

/// One execution of the case, with its originating run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestCaseHistoryLine {
    pub run_id: i64,
    pub run_name: String,
    pub environment: Option<String>,
    pub status: TestStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// History of a test case, most recent execution first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestCaseHistory {
    pub test_case_id: i64,
    pub title: String,
    pub history: Vec<TestCaseHistoryLine>,
}
