//! Employee API Handlers
//!
//! Each handler performs at most one store round trip. Identifiers and bodies
//! are decoded before the store is touched.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::extract::{EmployeeIdPath, EmployeePayload};
use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreated};
use crate::utils::{AppError, AppResult, MessageResponse, message};

const NOT_FOUND: &str = "Employee not found";

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state
        .employees
        .find_all()
        .await
        .map_err(|e| AppError::store("Error finding employees", e))?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    EmployeeIdPath(id): EmployeeIdPath,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .find_by_id(id)
        .await
        .map_err(|e| AppError::store("Error finding employee", e))?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    EmployeePayload(input): EmployeePayload,
) -> AppResult<(StatusCode, Json<EmployeeCreated>)> {
    let id = state
        .employees
        .insert(input)
        .await
        .map_err(|e| AppError::store("Error inserting employee", e))?;

    tracing::info!(employee_id = %id, "Employee created");
    Ok((StatusCode::CREATED, Json(EmployeeCreated { id })))
}

/// Replace an employee's username, password and skills
pub async fn update(
    State(state): State<ServerState>,
    EmployeeIdPath(id): EmployeeIdPath,
    EmployeePayload(input): EmployeePayload,
) -> AppResult<Json<MessageResponse>> {
    // 路径上的 ID 为准，请求体里的 id 忽略
    let (_, fields) = input.into_parts();

    let matched = state
        .employees
        .update_by_id(id, fields)
        .await
        .map_err(|e| AppError::store("Error updating employee", e))?;
    if matched == 0 {
        return Err(AppError::not_found(NOT_FOUND));
    }

    tracing::info!(employee_id = %id, "Employee updated");
    Ok(message("Employee updated successfully"))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    EmployeeIdPath(id): EmployeeIdPath,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state
        .employees
        .delete_by_id(id)
        .await
        .map_err(|e| AppError::store("Error deleting employee", e))?;
    if deleted == 0 {
        return Err(AppError::not_found(NOT_FOUND));
    }

    tracing::info!(employee_id = %id, "Employee deleted");
    Ok(message("Employee deleted successfully"))
}
