//! Core types for Marchand.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;

pub use catalog::{Category, CategoryFilter, Product};
pub use id::*;
