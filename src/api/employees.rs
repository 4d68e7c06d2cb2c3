//! Employee API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::Employee;
use crate::AppState;

/// Body returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

/// POST /api/v1/employee - Create a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let created = state.service.create(employee).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/employee - List all employees.
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, AppError> {
    state.service.list_all().await.map(Json)
}

/// GET /api/v1/employee/{id} - Get a single employee.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, AppError> {
    state.service.get_by_id(id).await.map(Json)
}

/// PATCH /api/v1/employee/{id} - Overwrite the fields present in the body.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<Employee>,
) -> Result<Json<Employee>, AppError> {
    state.service.update(id, patch).await.map(Json)
}

/// DELETE /api/v1/employee/{id} - Delete an employee.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, AppError> {
    state.service.delete_by_id(id).await?;
    Ok(DELETED_MESSAGE)
}
