//! RoboTech Core - Shared types library.
//!
//! This crate provides common types used across all RoboTech client
//! components:
//! - `client` - API client, state stores, and catalog query controller
//! - `cli` - Command-line storefront and admin console
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
