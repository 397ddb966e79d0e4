//! Store database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Store;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub status: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Store {
    fn from(model: Model) -> Self {
        Store {
            id: model.id,
            name: model.name,
            address: model.address,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<Store> for ActiveModel {
    fn from(store: Store) -> Self {
        ActiveModel {
            id: Set(store.id),
            name: Set(store.name),
            address: Set(store.address),
            status: Set(store.status),
            created_at: Set(store.created_at),
            updated_at: Set(store.updated_at),
            deleted_at: Set(store.deleted_at),
        }
    }
}
