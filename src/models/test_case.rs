//! Test case DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::entity::test_case;
use crate::error::AppResult;

use super::require_text;

/// Priority assigned when the request does not name one.
pub const DEFAULT_PRIORITY: &str = "medium";

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

/// Request body for creating a test case.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTestCaseRequest {
    pub project_id: i64,
    /// Title (max 200 characters).
    pub title: String,
    pub description: Option<String>,
    /// Free-form priority label (default "medium").
    #[serde(default = "default_priority")]
    pub priority: String,
}

impl CreateTestCaseRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("title", &self.title, 200)?;
        require_text("priority", &self.priority, 20)
    }
}

/// Partial update of a test case. Absent fields are left unchanged; an
/// explicit `"description": null` clears the description.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTestCaseRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub priority: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateTestCaseRequest {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(ref title) = self.title {
            require_text("title", title, 200)?;
        }
        if let Some(ref priority) = self.priority {
            require_text("priority", priority, 20)?;
        }
        Ok(())
    }
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Test case as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestCaseResponse {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub is_active: bool,
}

impl From<test_case::Model> for TestCaseResponse {
    fn from(m: test_case::Model) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            title: m.title,
            description: m.description,
            priority: m.priority,
            is_active: m.is_active,
        }
    }
}
