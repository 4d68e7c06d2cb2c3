//! SQLite-backed employee store.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::EmployeeStore;
use crate::errors::AppError;
use crate::models::Employee;

const SELECT_COLUMNS: &str = "SELECT id, first_name, last_name, email FROM employees";

/// Employee store over a SQLite pool.
#[derive(Clone)]
pub struct SqliteEmployeeStore {
    pool: SqlitePool,
}

impl SqliteEmployeeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SqliteEmployeeStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(employee_from_row))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(employee_from_row))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(employee_from_row).collect())
    }

    async fn save(&self, employee: Employee) -> Result<Employee, AppError> {
        let result = match employee.id {
            None => {
                sqlx::query("INSERT INTO employees (first_name, last_name, email) VALUES (?, ?, ?)")
                    .bind(&employee.first_name)
                    .bind(&employee.last_name)
                    .bind(&employee.email)
                    .execute(&self.pool)
                    .await
                    .map_err(|err| map_insert_error(err, &employee))?
            }
            Some(id) => {
                sqlx::query(
                    "INSERT INTO employees (id, first_name, last_name, email) VALUES (?, ?, ?, ?) \
                     ON CONFLICT(id) DO UPDATE SET first_name = excluded.first_name, \
                     last_name = excluded.last_name, email = excluded.email",
                )
                .bind(id)
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .execute(&self.pool)
                .await?
            }
        };

        let id = employee.id.unwrap_or_else(|| result.last_insert_rowid());

        Ok(Employee {
            id: Some(id),
            ..employee
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "Delete of absent employee ignored");
        }
        Ok(())
    }
}

/// Translate the `UNIQUE(email)` violation on insert into the domain conflict.
///
/// Overwrites keep the raw database error: a collision there is not a create.
fn map_insert_error(err: sqlx::Error, employee: &Employee) -> AppError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    match (&employee.email, unique_violation) {
        (Some(email), true) => AppError::AlreadyExists(email.clone()),
        _ => AppError::from(err),
    }
}

fn employee_from_row(row: &SqliteRow) -> Employee {
    Employee {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
    }
}
