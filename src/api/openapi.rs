//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, employee_handler};
use crate::domain::Employee;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the HR backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Backend",
        version = "0.1.0",
        description = "User authentication and employee record management"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::signup,
        auth_handler::login,
        // Employee endpoints
        employee_handler::add_employee,
        employee_handler::get_all_employees,
        employee_handler::delete_employee,
        employee_handler::update_employee,
        employee_handler::find_by_id,
        employee_handler::find_by_name,
        employee_handler::get_all_by_department,
        employee_handler::count_by_department,
        employee_handler::count,
        employee_handler::health,
    ),
    components(
        schemas(
            Employee,
            TokenResponse,
            MessageResponse,
            auth_handler::SignupRequest,
            auth_handler::LoginRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "User signup and login"),
        (name = "Employees", description = "Employee record management")
    )
)]
pub struct ApiDoc;
