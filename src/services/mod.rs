//! Business logic services.
//!
//! Each read view is a pure join over records loaded by `DbPool`, computed on
//! every request with nothing cached.

pub mod coverage;
pub mod history;
pub mod report;
pub mod results;

use std::collections::BTreeSet;

pub use coverage::{aggregate_coverage, compute_coverage};
pub use history::{assemble_history, build_history};
pub use report::{assemble_report, build_report};
pub use results::record_result;

/// Deduplicate foreign keys for a batch lookup.
pub(crate) fn distinct_ids<I>(ids: I) -> Vec<i64>
where
    I: IntoIterator<Item = i64>,
{
    ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
