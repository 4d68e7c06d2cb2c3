//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all employee records. The service talks to
//! it through the [`EmployeeStore`] trait.

#[cfg(test)]
mod memory;
mod repository;

#[cfg(test)]
pub use memory::*;
pub use repository::*;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::Employee;

/// Persistence access for employee records.
///
/// Every call is atomic on its own; nothing spans calls.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;

    /// All employees in ascending id order.
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;

    /// Insert when `employee.id` is `None` (assigning a fresh id), otherwise
    /// overwrite the row with that id. A duplicate email fails with
    /// [`AppError::AlreadyExists`].
    async fn save(&self, employee: Employee) -> Result<Employee, AppError>;

    /// Remove the row if present. Missing ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT,
            last_name TEXT,
            email TEXT UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Database migrations applied");
    Ok(())
}
