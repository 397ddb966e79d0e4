//! SeaORM entities, one per table.

pub mod customer;
pub mod product;
pub mod store;
pub mod user;
