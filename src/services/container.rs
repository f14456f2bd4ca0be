//! Service container - wires repositories, the event publisher and
//! configuration into the service layer.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::infra::{EventPublisher, Persistence, UnitOfWork};

use super::auth_service::{AuthService, Authenticator};
use super::employee_service::{EmployeeManager, EmployeeService};

/// Container holding all application services
pub struct ServiceContainer {
    pub auth_service: Arc<dyn AuthService>,
    pub employee_service: Arc<dyn EmployeeService>,
}

impl ServiceContainer {
    /// Build the full service graph from a database connection.
    pub fn from_connection(
        db: DatabaseConnection,
        publisher: Arc<dyn EventPublisher>,
        config: Config,
    ) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let employee_repo = uow.employees();

        let auth_service = Arc::new(Authenticator::new(uow, publisher, config));
        let employee_service = Arc::new(EmployeeManager::new(employee_repo));

        Self {
            auth_service,
            employee_service,
        }
    }
}
