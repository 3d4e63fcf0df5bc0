//! Domain models and wire-shape adapters.
//!
//! The backend has two historical payload shapes (seed fixtures with
//! numeric `id`, production records with ObjectId `_id` and camelCase
//! fields). Each model here is the single normalized shape the rest of
//! the client works with; the `Raw*` types absorb the differences once,
//! at the API boundary.

mod category;
mod message;
mod product;
mod review;
mod user;

pub use category::Category;
pub use message::{ContactMessage, ContactPayload};
pub use product::{Product, ProductPayload, ProductSnapshot, RawProduct};
pub use review::Review;
pub use user::UserProfile;
