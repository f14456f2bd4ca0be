//! Employee HR record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Employee record as exchanged with clients and stored in the employee table.
///
/// The wire names `department_Id` and `role_Id` differ from the internal
/// field names; they are preserved exactly for client compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Employee {
    /// Unique employee id. For auto-provisioned records this equals the
    /// owning user's id; for manually added employees the client supplies it.
    #[schema(example = 101)]
    pub id: Option<i64>,

    #[schema(example = "alice")]
    pub firstname: String,

    #[schema(example = "Smith")]
    pub lastname: String,

    /// Unique across all employees
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@company.com")]
    pub email: String,

    #[serde(rename = "department_Id")]
    #[schema(example = "DEFAULT")]
    pub department_id: String,

    #[serde(rename = "role_Id")]
    #[schema(example = "21")]
    pub role_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_preserved() {
        let employee = Employee {
            id: Some(7),
            firstname: "alice".to_string(),
            lastname: String::new(),
            email: "alice@company.com".to_string(),
            department_id: "DEFAULT".to_string(),
            role_id: "21".to_string(),
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["department_Id"], "DEFAULT");
        assert_eq!(json["role_Id"], "21");
        assert!(json.get("department_id").is_none());

        let parsed: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, employee);
    }
}
