//! API E2E test suite.
//!
//! Drives the HTTP handlers against a real PostgreSQL database. Set
//! `QATM_TEST_DATABASE_URL` to enable; tests are skipped when it is unset.
//!
//! Run with: cargo test --test api_e2e

mod test_helpers;

mod test_catalogue;
mod test_coverage;
mod test_history;
mod test_report;
mod test_result_guard;
