//! Employee service - CRUD and query operations over employee records.
//!
//! Every operation here is a single store call, so the service works
//! directly against the repository rather than the Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Employee;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::EmployeeRepository;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Create a new employee record
    async fn add_employee(&self, employee: Employee) -> AppResult<Employee>;

    /// List all employees
    async fn get_all_employees(&self) -> AppResult<Vec<Employee>>;

    /// Fetch a single employee by id
    async fn find_by_id(&self, id: i64) -> AppResult<Employee>;

    /// Fetch a single employee by first name
    async fn find_by_firstname(&self, firstname: &str) -> AppResult<Employee>;

    /// List all employees in a department
    async fn get_all_by_department(&self, department_id: &str) -> AppResult<Vec<Employee>>;

    /// Count employees in a department
    async fn count_by_department(&self, department_id: &str) -> AppResult<u64>;

    /// Replace an existing employee record
    async fn update_employee(&self, id: i64, employee: Employee) -> AppResult<Employee>;

    /// Delete an employee record
    async fn delete_employee(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn add_employee(&self, employee: Employee) -> AppResult<Employee> {
        if employee.id.is_none() {
            return Err(AppError::validation("Employee id is required"));
        }

        if self.repo.exists_by_email(&employee.email).await? {
            return Err(AppError::DuplicateEmail(employee.email));
        }

        let created = self.repo.create(employee).await?;
        tracing::info!(employee_id = ?created.id, "employee created");
        Ok(created)
    }

    async fn get_all_employees(&self) -> AppResult<Vec<Employee>> {
        self.repo.list().await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Employee> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn find_by_firstname(&self, firstname: &str) -> AppResult<Employee> {
        let firstname = firstname.trim();
        if firstname.is_empty() {
            return Err(AppError::validation("First name must not be empty"));
        }

        self.repo.find_by_firstname(firstname).await?.ok_or_not_found()
    }

    async fn get_all_by_department(&self, department_id: &str) -> AppResult<Vec<Employee>> {
        if department_id.trim().is_empty() {
            return Err(AppError::validation("Department id must not be empty"));
        }

        self.repo.find_by_department(department_id).await
    }

    async fn count_by_department(&self, department_id: &str) -> AppResult<u64> {
        // An unknown department simply counts zero
        self.repo.count_by_department(department_id).await
    }

    async fn update_employee(&self, id: i64, mut employee: Employee) -> AppResult<Employee> {
        // Path id wins over any id in the body
        employee.id = Some(id);

        let existing = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if existing.email != employee.email && self.repo.exists_by_email(&employee.email).await? {
            return Err(AppError::DuplicateEmail(employee.email));
        }

        let updated = self.repo.update(employee).await?;
        tracing::info!(employee_id = id, "employee updated");
        Ok(updated)
    }

    async fn delete_employee(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(employee_id = id, "employee deleted");
        Ok(())
    }
}
