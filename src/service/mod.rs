//! Employee business rules.
//!
//! Duplicate emails are rejected on create, missing ids raise `NotFound` on read
//! and update, and updates merge only the fields the caller supplied.

use std::sync::Arc;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::Employee;

/// Service layer over an [`EmployeeStore`].
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Persist a new employee. Any client-supplied id is discarded.
    ///
    /// A null email is never checked for duplicates.
    pub async fn create(&self, mut employee: Employee) -> Result<Employee, AppError> {
        if let Some(email) = employee.email.as_deref() {
            if self.store.find_by_email(email).await?.is_some() {
                tracing::info!(email, "Rejected create with duplicate email");
                return Err(AppError::AlreadyExists(email.to_string()));
            }
        }

        employee.id = None;
        let saved = self.store.save(employee).await?;
        tracing::info!(id = ?saved.id, "Employee created");
        Ok(saved)
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Employee, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Apply the non-null fields of `patch` to the stored employee.
    ///
    /// A changed email is not checked against other employees. A collision is
    /// rejected by the table's unique constraint and surfaces as a database error.
    pub async fn update(&self, id: i64, patch: Employee) -> Result<Employee, AppError> {
        let mut employee = self.get_by_id(id).await?;
        employee.merge(patch);

        let saved = self.store.save(employee).await?;
        tracing::info!(id, "Employee updated");
        Ok(saved)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "Employee deleted");
        Ok(())
    }
}
