//! In-memory employee store for exercising the service and router without SQLite.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EmployeeStore;
use crate::errors::AppError;
use crate::models::Employee;

#[derive(Default)]
struct Rows {
    next_id: i64,
    by_id: BTreeMap<i64, Employee>,
}

/// Map-backed store that also counts writes so tests can assert on them.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    rows: RwLock<Rows>,
    saves: AtomicUsize,
    deletes: AtomicUsize,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls, successful or not.
    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let guard = self.rows.read().await;
        Ok(guard
            .by_id
            .values()
            .find(|e| e.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.rows.read().await.by_id.values().cloned().collect())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, AppError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.rows.write().await;

        if let Some(email) = &employee.email {
            let taken = guard
                .by_id
                .values()
                .any(|e| e.email.as_ref() == Some(email) && e.id != employee.id);
            if taken {
                return Err(match employee.id {
                    None => AppError::AlreadyExists(email.clone()),
                    Some(_) => AppError::Database(
                        "UNIQUE constraint failed: employees.email".to_string(),
                    ),
                });
            }
        }

        let id = match employee.id {
            Some(id) => {
                guard.next_id = guard.next_id.max(id);
                id
            }
            None => {
                guard.next_id += 1;
                guard.next_id
            }
        };
        employee.id = Some(id);
        guard.by_id.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.rows.write().await.by_id.remove(&id);
        Ok(())
    }
}
