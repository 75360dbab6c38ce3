//! Per-run report: every recorded result with its test case title.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::test_run;

use super::TestStatus;

/// Descriptive fields of the reported run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestRunInfo {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub environment: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&test_run::Model> for TestRunInfo {
    fn from(m: &test_run::Model) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            name: m.name.clone(),
            environment: m.environment.clone(),
            started_at: m.started_at,
            completed_at: m.completed_at,
        }
    }
}

/// A recorded result in the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestResultLine {
    pub id: i64,
    pub test_case_id: i64,
    pub test_case_title: String,
    pub status: TestStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Report for a test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestRunReport {
    pub run: TestRunInfo,
    pub results: Vec<TestResultLine>,
}
