//! Cache types for read-mostly API responses.

use crate::models::{Category, Product};

/// Cache keys for the read-mostly endpoints.
pub(crate) mod keys {
    pub const CATEGORIES: &str = "categories";
    pub const FEATURED: &str = "featured";
}

/// Cached value types.
#[derive(Debug, Clone)]
pub(crate) enum CacheValue {
    Categories(Vec<Category>),
    Featured(Vec<Product>),
}
