//! Durable client-side state stores.
//!
//! Each store owns one piece of state for the lifetime of the process,
//! persists it under its own storage key, and is injected wherever it is
//! needed. Mutations are serialized through each store's own lock; the
//! stores assume a single owning process (see [`crate::storage`]).

mod cart;
mod session;
mod theme;

pub use cart::{CartLine, CartStore};
pub use session::{AuthError, SessionStore};
pub use theme::{Theme, ThemeStore};
