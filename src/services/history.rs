//! Cross-run history of one test case, newest execution first.

use std::collections::HashMap;

use tracing::debug;

use crate::db::DbPool;
use crate::entity::{test_case, test_result, test_run};
use crate::error::{AppError, AppResult};
use crate::models::{TestCaseHistory, TestCaseHistoryLine};

use super::distinct_ids;

/// Load a test case, its results across all runs, and those runs.
pub async fn build_history(pool: &DbPool, case_id: i64) -> AppResult<TestCaseHistory> {
    let test_case = pool
        .get_test_case_by_id(case_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test case {}", case_id)))?;

    let results = pool.get_test_results_by_case_id(test_case.id).await?;
    let run_ids = distinct_ids(results.iter().map(|r| r.test_run_id));
    let runs = pool.get_test_runs_by_ids(&run_ids).await?;

    let history = assemble_history(&test_case, results, &runs)?;

    debug!(
        test_case_id = test_case.id,
        entries = history.history.len(),
        "Test case history built"
    );

    Ok(history)
}

/// Join results to their runs, ordered by `created_at` descending with ties
/// broken by result id descending.
pub fn assemble_history(
    test_case: &test_case::Model,
    mut results: Vec<test_result::Model>,
    runs: &[test_run::Model],
) -> AppResult<TestCaseHistory> {
    let runs_by_id: HashMap<i64, &test_run::Model> = runs.iter().map(|r| (r.id, r)).collect();

    results.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });

    let history = results
        .into_iter()
        .map(|r| {
            let run = runs_by_id.get(&r.test_run_id).ok_or_else(|| {
                AppError::Database(format!(
                    "Test run {} referenced by result {} is missing",
                    r.test_run_id, r.id
                ))
            })?;

            Ok(TestCaseHistoryLine {
                run_id: run.id,
                run_name: run.name.clone(),
                environment: run.environment.clone(),
                status: r.status,
                notes: r.notes,
                created_at: r.created_at,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(TestCaseHistory {
        test_case_id: test_case.id,
        title: test_case.title.clone(),
        history,
    })
}
