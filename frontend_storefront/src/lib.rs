// Browser-only modules (fetching, localStorage config) are gated so the
// crate also compiles natively for server-side rendering tests.
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod config_file;
pub mod pages;
pub mod router;
pub mod styles;
pub mod types;
