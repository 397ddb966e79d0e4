//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Customer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub address: String,
    pub is_member: bool,
    pub status: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    /// Soft delete timestamp (NULL = active, set = deactivated)
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            id: model.id,
            name: model.name,
            phone_number: model.phone_number,
            address: model.address,
            is_member: model.is_member,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

/// Insert form of a freshly built entity
impl From<Customer> for ActiveModel {
    fn from(customer: Customer) -> Self {
        ActiveModel {
            id: Set(customer.id),
            name: Set(customer.name),
            phone_number: Set(customer.phone_number),
            address: Set(customer.address),
            is_member: Set(customer.is_member),
            status: Set(customer.status),
            created_at: Set(customer.created_at),
            updated_at: Set(customer.updated_at),
            deleted_at: Set(customer.deleted_at),
        }
    }
}
