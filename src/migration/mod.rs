//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260201_000001_create_projects;
mod m20260201_000002_create_users;
mod m20260201_000003_create_test_cases;
mod m20260201_000004_create_test_runs;
mod m20260201_000005_create_test_results;
mod m20260202_000006_convert_test_results_status_to_enum;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260201_000001_create_projects::Migration),
            Box::new(m20260201_000002_create_users::Migration),
            Box::new(m20260201_000003_create_test_cases::Migration),
            Box::new(m20260201_000004_create_test_runs::Migration),
            Box::new(m20260201_000005_create_test_results::Migration),
            Box::new(m20260202_000006_convert_test_results_status_to_enum::Migration),
        ]
    }
}
