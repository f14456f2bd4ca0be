//! Service layer - Business logic
//!
//! Services implement the application workflows on top of the
//! infrastructure layer: authentication with employee provisioning,
//! and employee record management.

mod auth_service;
mod container;
mod employee_service;

pub use auth_service::{provision_employee, AuthService, Authenticator, Claims, TokenResponse};
pub use container::ServiceContainer;
pub use employee_service::{EmployeeManager, EmployeeService};
