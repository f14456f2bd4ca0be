//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_EMPLOYEE};

/// User roles enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    Employee,
    Admin,
}

impl UserRole {
    /// Employee-role users get a linked employee record provisioned at signup
    pub fn is_employee(&self) -> bool {
        matches!(self, UserRole::Employee)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::Employee,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::Employee => write!(f, "{}", ROLE_EMPLOYEE),
        }
    }
}

/// User identity record.
///
/// The id is assigned by the store on creation and shared with the
/// provisioned employee record (cross-entity identity, not a foreign key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!(UserRole::from(ROLE_EMPLOYEE), UserRole::Employee);
        assert_eq!(UserRole::from(ROLE_ADMIN), UserRole::Admin);
        assert_eq!(UserRole::Employee.to_string(), ROLE_EMPLOYEE);
        assert_eq!(UserRole::Admin.to_string(), ROLE_ADMIN);
    }

    #[test]
    fn unknown_role_defaults_to_employee() {
        assert_eq!(UserRole::from("ROLE_SOMETHING_ELSE"), UserRole::Employee);
        assert!(UserRole::from("").is_employee());
    }
}
