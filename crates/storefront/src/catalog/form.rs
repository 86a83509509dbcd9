//! Product form validation.
//!
//! Forms arrive from the presenter as raw strings, exactly as submitted.
//! [`ProductForm::validate`] turns them into a typed [`ProductDraft`] or
//! reports the first failing field; a failed validation never mutates any
//! state.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use marchand_core::{CategoryId, Product};

/// Errors that can occur when validating a [`ProductForm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The product name is empty.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The price is not a strictly positive decimal number.
    #[error("price must be a positive number")]
    InvalidPrice,
    /// The image URL is empty.
    #[error("image URL cannot be empty")]
    EmptyImageUrl,
    /// The category selector is empty, non-numeric, or not a real category id.
    #[error("a category must be selected")]
    MissingCategory,
}

/// Raw product form fields, as submitted by the presenter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub category_id: String,
}

impl ProductForm {
    /// Pre-fill a form from an existing product, for the edit view.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            image_url: product.image_url.clone(),
            category_id: product.category_id.to_string(),
        }
    }

    /// Validate the raw fields into a typed draft.
    ///
    /// # Errors
    ///
    /// Returns the first failing field, checked in form order: name, price,
    /// image URL, category.
    pub fn validate(&self) -> Result<ProductDraft, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let price =
            Decimal::from_str(self.price.trim()).map_err(|_| ValidationError::InvalidPrice)?;
        if price <= Decimal::ZERO {
            return Err(ValidationError::InvalidPrice);
        }

        if self.image_url.is_empty() {
            return Err(ValidationError::EmptyImageUrl);
        }

        let category_id = self
            .category_id
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::MissingCategory)?;
        if category_id < 1 {
            return Err(ValidationError::MissingCategory);
        }

        Ok(ProductDraft {
            name: self.name.clone(),
            price,
            image_url: self.image_url.clone(),
            category_id: CategoryId::new(category_id),
        })
    }
}

/// A validated product, ready for the repository to assign an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
    pub category_id: CategoryId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Cap".to_string(),
            price: "10.00".to_string(),
            image_url: "/img/cap.png".to_string(),
            category_id: "1".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_valid_form() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.name, "Cap");
        assert_eq!(draft.price, Decimal::new(1000, 2));
        assert_eq!(draft.category_id, CategoryId::new(1));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut form = valid_form();
        form.name = String::new();
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        for price in ["", "abc", "0", "-5"] {
            let mut form = valid_form();
            form.price = price.to_string();
            assert_eq!(
                form.validate(),
                Err(ValidationError::InvalidPrice),
                "price {price:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_image_url() {
        let mut form = valid_form();
        form.image_url = String::new();
        assert_eq!(form.validate(), Err(ValidationError::EmptyImageUrl));
    }

    #[test]
    fn test_validate_rejects_bad_categories() {
        // 0 is the "all products" sentinel, not a real category
        for category in ["", "x", "0", "-1"] {
            let mut form = valid_form();
            form.category_id = category.to_string();
            assert_eq!(
                form.validate(),
                Err(ValidationError::MissingCategory),
                "category {category:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_product_roundtrips_through_validate() {
        let product = Product {
            id: marchand_core::ProductId::new(3),
            name: "Scarf".to_string(),
            price: Decimal::new(1950, 2),
            image_url: "/img/scarf.png".to_string(),
            category_id: CategoryId::new(2),
        };

        let draft = ProductForm::from_product(&product).validate().unwrap();
        assert_eq!(draft.name, product.name);
        assert_eq!(draft.price, product.price);
        assert_eq!(draft.image_url, product.image_url);
        assert_eq!(draft.category_id, product.category_id);
    }
}
