//! Domain models and API DTOs for the QA test management server.

pub mod coverage;
pub mod history;
pub mod project;
pub mod report;
pub mod status;
pub mod test_case;
pub mod test_result;
pub mod test_run;
pub mod user;

// Re-export commonly used types
pub use coverage::{CoverageLine, TestRunCoverage};
pub use history::{TestCaseHistory, TestCaseHistoryLine};
pub use project::{CreateProjectRequest, ProjectResponse};
pub use report::{TestResultLine, TestRunInfo, TestRunReport};
pub use status::{CoverageStatus, TestStatus};
pub use test_case::{CreateTestCaseRequest, TestCaseResponse, UpdateTestCaseRequest};
pub use test_result::{CreateTestResultRequest, NewTestResult, TestResultResponse};
pub use test_run::{CreateTestRunRequest, TestRunResponse};
pub use user::{CreateUserRequest, UserResponse};

use crate::error::{AppError, AppResult};

/// Reject blank values and values longer than `max_chars`.
pub(crate) fn require_text(field: &str, value: &str, max_chars: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    optional_text(field, Some(value), max_chars)
}

/// Reject values longer than `max_chars`; `None` is accepted.
pub(crate) fn optional_text(field: &str, value: Option<&str>, max_chars: usize) -> AppResult<()> {
    match value {
        Some(v) if v.chars().count() > max_chars => Err(AppError::InvalidInput(format!(
            "{} must be at most {} characters",
            field, max_chars
        ))),
        _ => Ok(()),
    }
}
