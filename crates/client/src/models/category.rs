//! Category model.

use serde::{Deserialize, Serialize};

use robotech_core::CategoryId;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Number of products currently assigned, when the backend includes it.
    #[serde(default)]
    pub product_count: Option<u32>,
}
