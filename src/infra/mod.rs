//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - The Redis-backed event publisher
//! - Unit of Work for transaction management

pub mod db;
pub mod events;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use events::{EventPublisher, LogPublisher, RedisPublisher};
pub use repositories::{EmployeeRepository, EmployeeStore, UserRepository, UserStore};
pub use unit_of_work::{
    Persistence, TransactionContext, TxEmployeeRepository, TxUserRepository, UnitOfWork,
};
