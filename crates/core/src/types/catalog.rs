//! Catalog data model: categories, products, and the category filter.
//!
//! These are the records persisted by the storefront's catalog store. The serde
//! field names are the wire format - changing them breaks previously persisted
//! catalogs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CategoryId, ProductId};

/// A product category.
///
/// Categories are loaded once from the seed data and never mutated or deleted
/// by the coordinator - there is no category CRUD surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A catalog product.
///
/// `price` is carried as a decimal string on the wire so cart totals stay
/// exact across persist/reload cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub image_url: String,
    pub category_id: CategoryId,
}

/// A category selection for filtering the visible product list.
///
/// The UI's category selector uses `0` as a pseudo-category meaning "show all
/// products"; that sentinel is folded into [`CategoryFilter::All`] at the
/// boundary so the rest of the code never compares raw ids against zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filter - the whole catalog is visible.
    #[default]
    All,
    /// Only products in the given category are visible.
    Only(CategoryId),
}

impl CategoryFilter {
    /// Build a filter from the raw selector value, mapping the `0` sentinel
    /// to [`CategoryFilter::All`].
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        if raw == 0 {
            Self::All
        } else {
            Self::Only(CategoryId::new(raw))
        }
    }

    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => product.category_id == *id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cap() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Cap".to_string(),
            price: Decimal::new(1000, 2),
            image_url: "/img/cap.png".to_string(),
            category_id: CategoryId::new(1),
        }
    }

    #[test]
    fn test_product_wire_format() {
        let json = serde_json::to_string(&cap()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Cap","price":"10.00","image_url":"/img/cap.png","category_id":1}"#
        );

        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cap());
    }

    #[test]
    fn test_filter_from_raw_sentinel() {
        assert_eq!(CategoryFilter::from_raw(0), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_raw(2),
            CategoryFilter::Only(CategoryId::new(2))
        );
    }

    #[test]
    fn test_filter_matches() {
        let product = cap();
        assert!(CategoryFilter::All.matches(&product));
        assert!(CategoryFilter::Only(CategoryId::new(1)).matches(&product));
        assert!(!CategoryFilter::Only(CategoryId::new(9)).matches(&product));
    }
}
