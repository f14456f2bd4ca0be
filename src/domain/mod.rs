//! Domain layer - Core business entities and logic
//!
//! Contains the core domain models that represent business concepts
//! independent of infrastructure concerns: the User identity record,
//! the Employee HR record, the notification event payload, and the
//! Password value object.

pub mod employee;
pub mod event;
pub mod password;
pub mod user;

pub use employee::Employee;
pub use event::{EventType, NotificationEvent};
pub use password::Password;
pub use user::{User, UserRole};
