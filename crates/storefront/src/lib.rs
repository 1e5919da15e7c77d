//! Servex Storefront library.
//!
//! Everything the storefront knows how to do, independent of any front end:
//! the static service catalog, the cart and session stores, the mock
//! checkout flow, and the sample dashboard data.
//!
//! # Architecture
//!
//! Two pieces of cross-page state exist: the session store (at most one
//! logged-in identity) and the cart store (service id → line). Both load
//! from an injected [`storage::KeyValueStore`] at construction, mutate in
//! memory, and mirror every mutation back to storage. Consumers (the CLI,
//! tests) read store state and invoke store operations; they hold no state
//! of their own.
//!
//! There is no server behind any of this. "Login" fabricates an identity
//! from form input after a simulated delay, and "payment" is a timed wait
//! that always succeeds. The delays live in [`config::StorefrontConfig`] so
//! tests can shrink them.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
