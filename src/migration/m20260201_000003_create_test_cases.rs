//! Migration: Create test_cases table.

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
                CREATE TABLE test_cases (
                    id BIGSERIAL PRIMARY KEY,
                    project_id BIGINT NOT NULL REFERENCES projects(id),

                    title VARCHAR(200) NOT NULL,
                    description TEXT,

                    -- Free-form label, not a closed set
                    priority VARCHAR(20) NOT NULL DEFAULT 'medium',
                    is_active BOOLEAN NOT NULL DEFAULT TRUE
                );

                -- Index for coverage candidate set (project cases in creation order)
                CREATE INDEX idx_test_cases_project_id ON test_cases(project_id, id);
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
                DROP TABLE IF EXISTS test_cases CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
