// frontend_storefront/src/components/mod.rs

pub mod about_section;
pub mod contact_section;
pub mod profile_header;
