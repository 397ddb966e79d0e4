//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Product;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub sku: String,
    #[sea_orm(column_name = "type")]
    pub product_type: String,
    pub name: String,
    pub brand: String,
    pub sugar_level: i32,
    pub production_year: String,
    pub distributor: String,
    pub status: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: model.id,
            sku: model.sku,
            product_type: model.product_type,
            name: model.name,
            brand: model.brand,
            sugar_level: model.sugar_level,
            production_year: model.production_year,
            distributor: model.distributor,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            sku: Set(product.sku),
            product_type: Set(product.product_type),
            name: Set(product.name),
            brand: Set(product.brand),
            sugar_level: Set(product.sugar_level),
            production_year: Set(product.production_year),
            distributor: Set(product.distributor),
            status: Set(product.status),
            created_at: Set(product.created_at),
            updated_at: Set(product.updated_at),
            deleted_at: Set(product.deleted_at),
        }
    }
}
