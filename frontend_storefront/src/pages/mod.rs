// frontend_storefront/src/pages/mod.rs

pub mod profile;
