// frontend_storefront/src/api/mod.rs

pub mod business;
pub mod utils;
