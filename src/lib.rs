//! QA test management server library.
//!
//! Tracks projects, test cases, test runs and one result per test case per
//! run, and derives run coverage, run reports and per-case history from them.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
