//! Employee repository implementation.
//!
//! Email uniqueness is enforced both by `exists_by_email` pre-checks in the
//! service layer and by the unique constraint on the column; constraint
//! violations surface as the same `DuplicateEmail` error kind.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, SqlErr,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::Employee;
use crate::errors::{AppError, AppResult};

/// Employee repository trait for dependency injection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a new employee record; the id must be supplied by the caller
    async fn create(&self, employee: Employee) -> AppResult<Employee>;

    /// Find an employee by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>>;

    /// Find an employee by first name
    async fn find_by_firstname(&self, firstname: &str) -> AppResult<Option<Employee>>;

    /// Check whether any employee already uses this email
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// List all employees in a department
    async fn find_by_department(&self, department_id: &str) -> AppResult<Vec<Employee>>;

    /// Count employees in a department
    async fn count_by_department(&self, department_id: &str) -> AppResult<u64>;

    /// Replace all mutable fields of an existing employee
    async fn update(&self, employee: Employee) -> AppResult<Employee>;

    /// Delete an employee by id
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// List all employees
    async fn list(&self) -> AppResult<Vec<Employee>>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Build an insertable active model from a wire-level employee record
pub(crate) fn active_model_from(employee: Employee) -> AppResult<ActiveModel> {
    let id = employee
        .id
        .ok_or_else(|| AppError::validation("Employee id is required"))?;

    Ok(ActiveModel {
        id: Set(id),
        firstname: Set(employee.firstname),
        lastname: Set(employee.lastname),
        email: Set(employee.email),
        department_id: Set(employee.department_id),
        role_id: Set(employee.role_id),
    })
}

/// Map a unique-constraint violation on the email column to `DuplicateEmail`
pub(crate) fn map_insert_err(e: sea_orm::DbErr, email: &str) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateEmail(email.to_string()),
        _ => AppError::from(e),
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn create(&self, employee: Employee) -> AppResult<Employee> {
        let email = employee.email.clone();
        let active_model = active_model_from(employee)?;

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_err(e, &email))?;

        Ok(Employee::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn find_by_firstname(&self, firstname: &str) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find()
            .filter(employee::Column::Firstname.eq(firstname))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn find_by_department(&self, department_id: &str) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .filter(employee::Column::DepartmentId.eq(department_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn count_by_department(&self, department_id: &str) -> AppResult<u64> {
        EmployeeEntity::find()
            .filter(employee::Column::DepartmentId.eq(department_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, employee: Employee) -> AppResult<Employee> {
        let id = employee
            .id
            .ok_or_else(|| AppError::validation("Employee id is required"))?;

        let existing = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let email = employee.email.clone();
        let mut active: ActiveModel = existing.into();
        active.firstname = Set(employee.firstname);
        active.lastname = Set(employee.lastname);
        active.email = Set(employee.email);
        active.department_id = Set(employee.department_id);
        active.role_id = Set(employee.role_id);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| map_insert_err(e, &email))?;

        Ok(Employee::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }
}
