//! Marchand Storefront - view/state coordinator for the shop page.
//!
//! This crate owns the three pieces of state behind the single-page shop:
//! the current view mode, the in-memory product catalog (mirrored into a
//! persisted key-value store), and the shopping cart. Rendering, seed data
//! transport, confirmation prompts, and notifications are external
//! collaborators injected at the seams, so every flow is testable without a
//! UI.
//!
//! # Modules
//!
//! - [`store`] - the persisted string key-value store behind the catalog
//! - [`catalog`] - catalog repository, seed source, and form validation
//! - [`cart`] - the shopping cart ledger
//! - [`views`] - the view-mode state machine and presenter snapshot
//! - [`config`] - environment configuration for the binaries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod store;
pub mod views;
