// backend_storefront/src/api/mod.rs

pub mod business;

// Re-export route handlers for main.rs
pub use business::{get_business, put_business};
