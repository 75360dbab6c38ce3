//! Coverage view of one test run over its project's test cases.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CoverageStatus;

/// One project test case and how it fared in the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoverageLine {
    pub test_case_id: i64,
    pub title: String,
    pub status: CoverageStatus,
    pub notes: Option<String>,
}

/// Coverage summary for a test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestRunCoverage {
    pub run_id: i64,
    pub project_id: i64,
    /// Test cases in the run's project.
    pub total_cases: u64,
    /// Cases with a recorded result in this run.
    pub executed_cases: u64,
    pub not_run_cases: u64,
    /// One line per project case, in case creation order.
    pub lines: Vec<CoverageLine>,
    pub pass_count: u64,
    pub fail_count: u64,
    pub blocked_count: u64,
    pub skipped_count: u64,
    /// `pass_count / executed_cases`; null when nothing was executed.
    pub pass_rate: Option<f64>,
}
