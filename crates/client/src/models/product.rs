//! Product model and wire adapter.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use robotech_core::{Price, ProductId, ProductStatus};

/// A catalog product, normalized.
///
/// Always produced from [`RawProduct`] at the API boundary; call sites
/// never see the backend's shape variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category display name as listings return it.
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Pre-discount price, when the product is on sale.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub original_price: Option<Decimal>,
    /// Average review rating, clamped to 0.0..=5.0.
    pub rating: f32,
    pub review_count: u32,
    pub description: String,
    pub image: Option<String>,
    pub badge: Option<String>,
    pub in_stock: bool,
    pub stock: Option<u32>,
    pub features: Vec<String>,
    pub status: ProductStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Price as a displayable [`Price`] (the catalog is USD-only).
    #[must_use]
    pub const fn display_price(&self) -> Price {
        Price::usd(self.price)
    }
}

/// Product as the backend sends it.
///
/// Accepts both payload generations: `_id` or `id`, missing optional
/// fields, and the legacy `reviews` count field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default, alias = "reviews")]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        // Stock flag: explicit value wins, otherwise derive from the
        // quantity; products without either are assumed purchasable.
        let in_stock = raw
            .in_stock
            .unwrap_or_else(|| raw.stock.is_none_or(|s| s > 0));

        Self {
            id: ProductId::new(raw.id),
            name: raw.name,
            category: raw.category.unwrap_or_default(),
            price: raw.price,
            original_price: raw.original_price,
            rating: raw.rating.unwrap_or(0.0).clamp(0.0, 5.0),
            review_count: raw.review_count.unwrap_or(0),
            description: raw.description.unwrap_or_default(),
            image: raw.image,
            badge: raw.badge,
            in_stock,
            stock: raw.stock,
            features: raw.features,
            status: raw.status.unwrap_or_default(),
            created_at: raw.created_at,
        }
    }
}

/// Denormalized snapshot of a product at the time it entered the cart.
///
/// Not a live reference: later catalog edits do not rewrite cart lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: Option<String>,
    pub description: String,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
        }
    }
}

/// Fields sent when creating or updating a product (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub stock: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    pub status: ProductStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_mongo_shape() {
        let json = r#"{
            "_id": "64f1a2b3c4d5e6f708192a3b",
            "name": "RoboClean Pro X1",
            "category": "Robot Cleaners",
            "price": 599.99,
            "originalPrice": 799.99,
            "rating": 4.8,
            "reviewCount": 1250,
            "description": "Advanced AI navigation",
            "inStock": true,
            "features": ["AI Navigation", "3000Pa Suction"]
        }"#;

        let raw: RawProduct = serde_json::from_str(json).unwrap();
        let product = Product::from(raw);

        assert_eq!(product.id.as_str(), "64f1a2b3c4d5e6f708192a3b");
        assert_eq!(product.price, Decimal::new(59999, 2));
        assert_eq!(product.original_price, Some(Decimal::new(79999, 2)));
        assert_eq!(product.review_count, 1250);
        assert!(product.in_stock);
        assert_eq!(product.features.len(), 2);
    }

    #[test]
    fn test_normalizes_fixture_shape() {
        // Seed fixtures use `id` and the legacy `reviews` count.
        let json = r#"{
            "id": "2",
            "name": "ChefBot Deluxe",
            "price": 1299.99,
            "rating": 4.9,
            "reviews": 890
        }"#;

        let raw: RawProduct = serde_json::from_str(json).unwrap();
        let product = Product::from(raw);

        assert_eq!(product.id.as_str(), "2");
        assert_eq!(product.review_count, 890);
        assert_eq!(product.category, "");
        assert!(product.in_stock, "missing stock info assumes purchasable");
        assert_eq!(product.status, robotech_core::ProductStatus::Active);
    }

    #[test]
    fn test_both_shapes_normalize_identically() {
        let mongo = r#"{"_id": "p1", "name": "LawnMaster AI", "price": 799.99}"#;
        let fixture = r#"{"id": "p1", "name": "LawnMaster AI", "price": 799.99}"#;

        let a = Product::from(serde_json::from_str::<RawProduct>(mongo).unwrap());
        let b = Product::from(serde_json::from_str::<RawProduct>(fixture).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_stock_quantity_drives_flag() {
        let json = r#"{"id": "p1", "name": "X", "price": 1.0, "stock": 0}"#;
        let product = Product::from(serde_json::from_str::<RawProduct>(json).unwrap());
        assert!(!product.in_stock);

        let json = r#"{"id": "p1", "name": "X", "price": 1.0, "stock": 3}"#;
        let product = Product::from(serde_json::from_str::<RawProduct>(json).unwrap());
        assert!(product.in_stock);
    }

    #[test]
    fn test_rating_clamped() {
        let json = r#"{"id": "p1", "name": "X", "price": 1.0, "rating": 9.5}"#;
        let product = Product::from(serde_json::from_str::<RawProduct>(json).unwrap());
        assert!((product.rating - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_snapshot_captures_price() {
        let json = r#"{"id": "p1", "name": "X", "price": 100.0, "description": "d"}"#;
        let product = Product::from(serde_json::from_str::<RawProduct>(json).unwrap());
        let snapshot = ProductSnapshot::from(&product);
        assert_eq!(snapshot.price, Decimal::new(100, 0));
        assert_eq!(snapshot.id, product.id);
    }

    #[test]
    fn test_display_price() {
        let json = r#"{"id": "p1", "name": "X", "price": 599.99}"#;
        let product = Product::from(serde_json::from_str::<RawProduct>(json).unwrap());
        assert_eq!(product.display_price().to_string(), "$599.99");
    }
}
