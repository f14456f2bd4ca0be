//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, EventPublisher};
use crate::services::{AuthService, EmployeeService, ServiceContainer};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create application state from the database, publisher and config.
    pub fn from_config(
        database: Arc<Database>,
        publisher: Arc<dyn EventPublisher>,
        config: Config,
    ) -> Self {
        let container = ServiceContainer::from_connection(
            database.get_connection(),
            publisher,
            config.clone(),
        );

        Self {
            auth_service: container.auth_service,
            employee_service: container.employee_service,
            database,
            config,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
            database,
            config,
        }
    }
}
