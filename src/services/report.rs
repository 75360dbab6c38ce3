//! Run report: every result recorded in a run, with its test case title.

use std::collections::HashMap;

use tracing::debug;

use crate::db::DbPool;
use crate::entity::{test_case, test_result, test_run};
use crate::error::{AppError, AppResult};
use crate::models::{TestResultLine, TestRunInfo, TestRunReport};

use super::distinct_ids;

/// Load a run with its results and the titles of the cases they reference.
pub async fn build_report(pool: &DbPool, run_id: i64) -> AppResult<TestRunReport> {
    let run = pool
        .get_test_run_by_id(run_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test run {}", run_id)))?;

    let results = pool.get_test_results_by_run_id(run.id).await?;
    let case_ids = distinct_ids(results.iter().map(|r| r.test_case_id));
    let cases = pool.get_test_cases_by_ids(&case_ids).await?;

    let report = assemble_report(&run, &results, &cases)?;

    debug!(run_id = run.id, results = report.results.len(), "Run report built");

    Ok(report)
}

/// Join results to their test cases. Lines keep the order of `results`.
pub fn assemble_report(
    run: &test_run::Model,
    results: &[test_result::Model],
    cases: &[test_case::Model],
) -> AppResult<TestRunReport> {
    let titles: HashMap<i64, &str> = cases.iter().map(|c| (c.id, c.title.as_str())).collect();

    let lines = results
        .iter()
        .map(|r| {
            let title = titles.get(&r.test_case_id).ok_or_else(|| {
                AppError::Database(format!(
                    "Test case {} referenced by result {} is missing",
                    r.test_case_id, r.id
                ))
            })?;

            Ok(TestResultLine {
                id: r.id,
                test_case_id: r.test_case_id,
                test_case_title: title.to_string(),
                status: r.status,
                notes: r.notes.clone(),
                created_at: r.created_at,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(TestRunReport {
        run: TestRunInfo::from(run),
        results: lines,
    })
}
