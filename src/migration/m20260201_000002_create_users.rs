//! Migration: Create users table.
//!
//! Users optionally belong to a project and may execute test runs.

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
                CREATE TABLE users (
                    id BIGSERIAL PRIMARY KEY,
                    project_id BIGINT REFERENCES projects(id),
                    email VARCHAR(255) NOT NULL,
                    name VARCHAR(100) NOT NULL,
                    role VARCHAR(50) NOT NULL,

                    CONSTRAINT uq_users_email UNIQUE (email)
                );

                -- Index for project lookup
                CREATE INDEX idx_users_project_id ON users(project_id);
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
                DROP TABLE IF EXISTS users CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
