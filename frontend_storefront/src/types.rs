// frontend_storefront/src/types.rs
use serde::{Deserialize, Serialize};

/// A business's public profile as served by the backend.
///
/// The record is created and owned by whoever fetched it; presentational
/// components only borrow it for the duration of a render pass.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BusinessProfile {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Free-form "about" text. Absent in the payload means empty here.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}
