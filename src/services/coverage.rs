//! Coverage aggregation for a single test run.
//!
//! The candidate set is every test case of the run's project, not only the
//! cases the run touched; cases without a result are reported as `not_run`.

use std::collections::HashMap;

use tracing::debug;

use crate::db::DbPool;
use crate::entity::{test_case, test_result, test_run};
use crate::error::{AppError, AppResult};
use crate::models::{CoverageLine, CoverageStatus, TestRunCoverage, TestStatus};

/// Load a run, its project's cases and its results, and aggregate them.
pub async fn compute_coverage(pool: &DbPool, run_id: i64) -> AppResult<TestRunCoverage> {
    let run = pool
        .get_test_run_by_id(run_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test run {}", run_id)))?;

    let cases = pool.get_test_cases_by_project_id(run.project_id).await?;
    let results = pool.get_test_results_by_run_id(run.id).await?;

    let coverage = aggregate_coverage(&run, &cases, &results);

    debug!(
        run_id = coverage.run_id,
        total = coverage.total_cases,
        executed = coverage.executed_cases,
        "Coverage computed"
    );

    Ok(coverage)
}

/// Merge the project's cases with the run's results.
///
/// `cases` must already be in creation order; lines keep that order.
pub fn aggregate_coverage(
    run: &test_run::Model,
    cases: &[test_case::Model],
    results: &[test_result::Model],
) -> TestRunCoverage {
    let results_by_case: HashMap<i64, &test_result::Model> =
        results.iter().map(|r| (r.test_case_id, r)).collect();

    let mut tally = StatusTally::default();
    let lines: Vec<CoverageLine> = cases
        .iter()
        .map(|tc| match results_by_case.get(&tc.id) {
            Some(r) => {
                tally.record(r.status);
                CoverageLine {
                    test_case_id: tc.id,
                    title: tc.title.clone(),
                    status: CoverageStatus::from(r.status),
                    notes: r.notes.clone(),
                }
            }
            None => CoverageLine {
                test_case_id: tc.id,
                title: tc.title.clone(),
                status: CoverageStatus::NotRun,
                notes: None,
            },
        })
        .collect();

    let total_cases = lines.len() as u64;
    let executed_cases = tally.executed();

    TestRunCoverage {
        run_id: run.id,
        project_id: run.project_id,
        total_cases,
        executed_cases,
        not_run_cases: total_cases - executed_cases,
        lines,
        pass_count: tally.pass,
        fail_count: tally.fail,
        blocked_count: tally.blocked,
        skipped_count: tally.skipped,
        pass_rate: tally.pass_rate(),
    }
}

/// Per-status counts over executed cases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct StatusTally {
    pass: u64,
    fail: u64,
    blocked: u64,
    skipped: u64,
}

impl StatusTally {
    fn record(&mut self, status: TestStatus) {
        match status {
            TestStatus::Pass => self.pass += 1,
            TestStatus::Fail => self.fail += 1,
            TestStatus::Blocked => self.blocked += 1,
            TestStatus::Skipped => self.skipped += 1,
        }
    }

    fn executed(&self) -> u64 {
        self.pass + self.fail + self.blocked + self.skipped
    }

    /// Absent, not zero, when nothing was executed.
    fn pass_rate(&self) -> Option<f64> {
        let executed = self.executed();
        (executed > 0).then(|| self.pass as f64 / executed as f64)
    }
}
