//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Employee;

/// The primary key is never auto-generated: provisioned records reuse the
/// owning user's id, manually added records carry a client-supplied id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub department_id: String,
    pub role_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain record
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: Some(model.id),
            firstname: model.firstname,
            lastname: model.lastname,
            email: model.email,
            department_id: model.department_id,
            role_id: model.role_id,
        }
    }
}
