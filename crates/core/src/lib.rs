//! Marchand Core - Shared types library.
//!
//! This crate provides common types used across all Marchand components:
//! - `storefront` - The view/state coordinator for the shop page
//! - `cli` - Command-line tools for seeding and inspecting the catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the catalog data model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
