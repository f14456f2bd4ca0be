//! Employee management handlers.
//!
//! Paths and status codes here are load-bearing: existing clients depend
//! on them, down to the mixed naming of `getAllByDepartment` and the
//! `departmentId` query parameter.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::Employee;
use crate::errors::AppResult;
use crate::types::NoContent;

/// Query parameters for the employee count endpoint
#[derive(Debug, Deserialize)]
pub struct CountQuery {
    #[serde(rename = "departmentId", default)]
    pub department_id: String,
}

/// Create employee management routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/add-employee", post(add_employee))
        .route("/get-all", get(get_all_employees))
        .route("/delete-emp/:id", delete(delete_employee))
        .route("/update-emp/:id", put(update_employee))
        .route("/find-by-id/:id", get(find_by_id))
        .route("/find-by-name/:firstname", get(find_by_name))
        .route("/getAllByDepartment/:department_id", get(get_all_by_department))
        .route("/count-by-department/:department_id", get(count_by_department))
        .route("/count", get(count))
        .route("/health", get(health))
}

/// Create a new employee record
#[utoipa::path(
    post,
    path = "/emp-controller/add-employee",
    tag = "Employees",
    request_body = Employee,
    responses(
        (status = 201, description = "Employee created"),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn add_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Employee>,
) -> AppResult<StatusCode> {
    state.employee_service.add_employee(payload).await?;
    Ok(StatusCode::CREATED)
}

/// List all employees
#[utoipa::path(
    get,
    path = "/emp-controller/get-all",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees", body = [Employee])
    )
)]
pub async fn get_all_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.get_all_employees().await?;
    Ok(Json(employees))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/emp-controller/delete-emp/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 202, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Update an existing employee
#[utoipa::path(
    put,
    path = "/emp-controller/update-emp/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = Employee,
    responses(
        (status = 204, description = "Employee updated"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<Employee>,
) -> AppResult<NoContent> {
    state.employee_service.update_employee(id, payload).await?;
    Ok(NoContent)
}

/// Fetch a single employee by id
#[utoipa::path(
    get,
    path = "/emp-controller/find-by-id/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.find_by_id(id).await?;
    Ok(Json(employee))
}

/// Fetch a single employee by first name
#[utoipa::path(
    get,
    path = "/emp-controller/find-by-name/{firstname}",
    tag = "Employees",
    params(("firstname" = String, Path, description = "Employee first name")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn find_by_name(
    State(state): State<AppState>,
    Path(firstname): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.find_by_firstname(&firstname).await?;
    Ok(Json(employee))
}

/// List all employees in a department
#[utoipa::path(
    get,
    path = "/emp-controller/getAllByDepartment/{department_id}",
    tag = "Employees",
    params(("department_id" = String, Path, description = "Department id")),
    responses(
        (status = 200, description = "Employees in department", body = [Employee])
    )
)]
pub async fn get_all_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state
        .employee_service
        .get_all_by_department(&department_id)
        .await?;
    Ok(Json(employees))
}

/// Count employees in a department (path variant)
#[utoipa::path(
    get,
    path = "/emp-controller/count-by-department/{department_id}",
    tag = "Employees",
    params(("department_id" = String, Path, description = "Department id")),
    responses(
        (status = 200, description = "Employee count", body = u64)
    )
)]
pub async fn count_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> AppResult<Json<u64>> {
    let count = state
        .employee_service
        .count_by_department(&department_id)
        .await?;
    Ok(Json(count))
}

/// Count employees in a department (query variant)
#[utoipa::path(
    get,
    path = "/emp-controller/count",
    tag = "Employees",
    params(("departmentId" = String, Query, description = "Department id")),
    responses(
        (status = 200, description = "Employee count", body = u64)
    )
)]
pub async fn count(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> AppResult<Json<u64>> {
    let count = state
        .employee_service
        .count_by_department(&query.department_id)
        .await?;
    Ok(Json(count))
}

/// Routing smoke check
#[utoipa::path(
    get,
    path = "/emp-controller/health",
    tag = "Employees",
    responses((status = 200, description = "Service reachable"))
)]
pub async fn health() -> &'static str {
    "User service routing is working!"
}
