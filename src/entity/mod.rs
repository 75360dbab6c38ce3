//! SeaORM entity definitions for PostgreSQL database.

pub mod project;
pub mod test_case;
pub mod test_result;
pub mod test_run;
pub mod user;
