//! Test run DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::test_run;
use crate::error::AppResult;

use super::{optional_text, require_text};

/// Request body for starting a test run. `started_at` is set by storage.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTestRunRequest {
    pub project_id: i64,
    /// Run name (max 200 characters).
    pub name: String,
    /// User executing the run, if known.
    pub executed_by_user_id: Option<i64>,
    /// Environment label such as "staging" (max 100 characters).
    pub environment: Option<String>,
}

impl CreateTestRunRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", &self.name, 200)?;
        optional_text("environment", self.environment.as_deref(), 100)
    }
}

/// Test run as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestRunResponse {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub executed_by_user_id: Option<i64>,
    pub environment: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<test_run::Model> for TestRunResponse {
    fn from(m: test_run::Model) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            name: m.name,
            executed_by_user_id: m.executed_by_user_id,
            environment: m.environment,
            started_at: m.started_at,
            completed_at: m.completed_at,
        }
    }
}
