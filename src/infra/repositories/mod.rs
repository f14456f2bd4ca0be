//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod employee_repository;
mod user_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use user_repository::{UserRepository, UserStore};

pub(crate) use employee_repository::{active_model_from, map_insert_err};

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
