//! Shopping cart store.
//!
//! Holds the ordered line items and persists them after every mutation.
//! Cart operations are total: there is no error channel, and persistence
//! is best-effort (failures are logged, never surfaced).

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use robotech_core::{Price, ProductId};

use crate::models::ProductSnapshot;
use crate::storage::{KeyValueStore, KeyValueStoreExt, keys};

/// One product + quantity pairing inside the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductSnapshot,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Shopping cart: ordered line items, at most one per product.
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    items: RwLock<Vec<CartLine>>,
}

impl CartStore {
    /// Load the cart from storage.
    ///
    /// A missing or unreadable persisted cart starts empty.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let items = match storage.get_json::<Vec<CartLine>>(keys::CART) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("failed to load persisted cart: {e}");
                Vec::new()
            }
        };

        Self {
            storage,
            items: RwLock::new(items),
        }
    }

    /// Add a product to the cart.
    ///
    /// If a line for the same product already exists its quantity is
    /// incremented by `quantity`; otherwise a new line is appended. A
    /// zero quantity is ignored.
    pub fn add_item(&self, product: ProductSnapshot, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let mut items = self.write();
        if let Some(line) = items.iter_mut().find(|line| line.product.id == product.id) {
            line.quantity += quantity;
        } else {
            items.push(CartLine { product, quantity });
        }
        self.persist(&items);
    }

    /// Remove a product's line item. No-op if the product is not in the
    /// cart.
    pub fn remove_item(&self, product_id: &ProductId) {
        let mut items = self.write();
        let before = items.len();
        items.retain(|line| line.product.id != *product_id);
        if items.len() != before {
            self.persist(&items);
        }
    }

    /// Set a line's quantity exactly (not additive).
    ///
    /// A quantity of zero removes the line. No-op if the product is not
    /// in the cart.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        let mut items = self.write();
        if let Some(line) = items.iter_mut().find(|line| line.product.id == *product_id) {
            line.quantity = quantity;
            self.persist(&items);
        }
    }

    /// Empty the cart.
    pub fn clear(&self) {
        let mut items = self.write();
        items.clear();
        self.persist(&items);
    }

    /// Sum of `price * quantity` over all lines, recomputed on demand.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.read().iter().map(CartLine::line_total).sum()
    }

    /// The cart total as a displayable [`Price`] (USD catalog).
    #[must_use]
    pub fn total_price(&self) -> Price {
        Price::usd(self.total())
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.read().iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart holds a line for `product_id`.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.read()
            .iter()
            .any(|line| line.product.id == *product_id)
    }

    /// Snapshot of the current line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.read().clone()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<CartLine>> {
        self.items
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<CartLine>> {
        self.items
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Best-effort persistence; a failed write keeps the in-memory cart.
    fn persist(&self, items: &[CartLine]) {
        if let Err(e) = self.storage.put_json(keys::CART, items) {
            tracing::warn!("failed to persist cart: {e}");
        }
    }
}
