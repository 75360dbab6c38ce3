//! Migration: Create test_results table.
//!
//! Status starts out as plain text; m20260202_000006 narrows it to the
//! test_status enum.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE test_results (
                    id BIGSERIAL PRIMARY KEY,
                    test_run_id BIGINT NOT NULL REFERENCES test_runs(id),
                    test_case_id BIGINT NOT NULL REFERENCES test_cases(id),

                    status VARCHAR(20) NOT NULL,
                    notes TEXT,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

                    -- One result per test case per run
                    CONSTRAINT uq_test_results_run_case UNIQUE (test_run_id, test_case_id)
                );

                -- Index for history lookup (newest first)
                CREATE INDEX idx_test_results_case_created
                    ON test_results(test_case_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TABLE IF EXISTS test_results CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
