//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::{customer_handler, product_handler, store_handler, user_handler};
use domain::{
    CreateCustomer, CreateProduct, CreateStore, CreateUser, Customer, Product, Store,
    UpdateCustomer, UpdateProduct, UpdateStore, UpdateUser, UserResponse, UserRole,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        customer_handler::list_customers,
        customer_handler::get_customer,
        customer_handler::create_customer,
        customer_handler::update_customer,
        customer_handler::deactivate_customer,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::create_product,
        product_handler::update_product,
        product_handler::delete_product,
        store_handler::list_stores,
        store_handler::get_store,
        store_handler::create_store,
        store_handler::update_store,
        store_handler::delete_store,
        user_handler::list_users,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            Customer,
            CreateCustomer,
            UpdateCustomer,
            Product,
            CreateProduct,
            UpdateProduct,
            Store,
            CreateStore,
            UpdateStore,
            UserResponse,
            UserRole,
            CreateUser,
            UpdateUser,
        )
    ),
    tags(
        (name = "Customers", description = "Customer records and membership"),
        (name = "Products", description = "Catalogue items keyed by SKU"),
        (name = "Stores", description = "Store locations"),
        (name = "Users", description = "Staff accounts"),
    )
)]
pub struct ApiDoc;
