//! Servex Core - Shared types library.
//!
//! This crate provides common types used across all Servex components:
//! - `storefront` - Catalog, cart, session, and checkout logic
//! - `cli` - Command-line front end standing in for the page layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
