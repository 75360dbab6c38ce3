//! Closed status sets for test results and coverage lines.

use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Outcome of executing one test case within one test run.
///
/// Stored as the PostgreSQL enum type `test_status`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "test_status")]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    #[sea_orm(string_value = "pass")]
    Pass,
    #[sea_orm(string_value = "fail")]
    Fail,
    #[sea_orm(string_value = "blocked")]
    Blocked,
    #[sea_orm(string_value = "skipped")]
    Skipped,
}

impl TestStatus {
    /// All four statuses, in display order.
    pub const ALL: [TestStatus; 4] = [Self::Pass, Self::Fail, Self::Blocked, Self::Skipped];

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Blocked => "blocked",
            Self::Skipped => "skipped",
        }
    }

    /// Parse from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pass" => Some(Self::Pass),
            "fail" => Some(Self::Fail),
            "blocked" => Some(Self::Blocked),
            "skipped" => Some(Self::Skipped),
            _ => None,
        }
    }
}

impl FromStr for TestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a project test case within one run's coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Pass,
    Fail,
    Blocked,
    Skipped,
    /// No result recorded for the case in this run.
    NotRun,
}

impl From<TestStatus> for CoverageStatus {
    fn from(status: TestStatus) -> Self {
        match status {
            TestStatus::Pass => Self::Pass,
            TestStatus::Fail => Self::Fail,
            TestStatus::Blocked => Self::Blocked,
            TestStatus::Skipped => Self::Skipped,
        }
    }
}
