//! Core type definitions.

mod email;
mod id;
mod price;
mod status;

pub use email::{Email, EmailError};
pub use id::{CategoryId, MessageId, ProductId, ReviewId, UserId};
pub use price::{CurrencyCode, Price};
pub use status::{MessagePriority, MessageStatus, ProductStatus, ReviewStatus, SortKey, UserRole};
