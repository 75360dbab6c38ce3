//! Database module providing connection management, migrations, and queries.

pub mod projects;
pub mod test_cases;
pub mod test_results;
pub mod test_runs;
pub mod users;

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, SqlErr,
    Statement,
};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Shared handle to the PostgreSQL connection pool.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to the database described by the configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let settings = &config.database;

        let mut opts = ConnectOptions::new(settings.url.clone());
        opts.max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(settings.sql_echo);

        let conn = Database::connect(opts)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        info!(
            "Database pool ready (max_connections={}, min_connections={})",
            settings.max_connections, settings.min_connections
        );

        Ok(Self { conn })
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Apply all pending migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Failed to run migrations: {}", e)))
    }

    /// Round-trip a trivial query to verify connectivity.
    pub async fn ping(&self) -> AppResult<()> {
        let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
        self.conn.query_one_raw(stmt).await?;
        Ok(())
    }
}

/// Constraint class of a failed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteViolation {
    Unique,
    ForeignKey,
}

/// Classify a write error by the storage constraint it violated, if any.
pub(crate) fn write_violation(err: &DbErr) -> Option<WriteViolation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Some(WriteViolation::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Some(WriteViolation::ForeignKey),
        _ => None,
    }
}
