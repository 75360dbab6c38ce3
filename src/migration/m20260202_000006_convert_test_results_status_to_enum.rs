//! Migration: Convert test_results.status to the test_status enum.
//!
//! The cast fails, and the migration with it, if any stored status is not one
//! of pass, fail, blocked, skipped.

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
                DO $$
                BEGIN
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'test_status') THEN
                        CREATE TYPE test_status AS ENUM ('pass', 'fail', 'blocked', 'skipped');
                    END IF;
                END
                $$;

                ALTER TABLE test_results
                    ALTER COLUMN status TYPE test_status
                    USING status::test_status;
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
                ALTER TABLE test_results
                    ALTER COLUMN status TYPE VARCHAR(20)
                    USING status::text;

                DROP TYPE IF EXISTS test_status;
                "#,
            )
            .await?;

        Ok(())
    }
}
