//! Presenter snapshot types.
//!
//! The Presenter is a pure function of state: given the current snapshot it
//! produces markup. These view structs carry everything it needs, with
//! prices already formatted for display - the exact decimals stay inside
//! the ledger.

use rust_decimal::Decimal;

use marchand_core::{Category, Product, ProductId};

use crate::cart::CartLedger;
use crate::catalog::ProductForm;

use super::ViewMode;

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    /// The cart badge count: distinct lines, not summed quantities.
    pub badge: usize,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: format_price(Decimal::ZERO),
            badge: 0,
        }
    }
}

impl From<&CartLedger> for CartView {
    fn from(cart: &CartLedger) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    product_id: line.product.id,
                    name: line.product.name.clone(),
                    quantity: line.quantity,
                    unit_price: format_price(line.product.price),
                    line_total: format_price(line.line_total()),
                })
                .collect(),
            total: format_price(cart.total()),
            badge: cart.line_count(),
        }
    }
}

/// Everything the Presenter needs to render the current view.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: ViewMode,
    pub categories: Vec<Category>,
    /// The products visible under the active category filter.
    pub visible_products: Vec<Product>,
    /// The product counter next to the grid.
    pub visible_count: usize,
    pub cart: CartView,
    /// Pre-filled form fields when the mode is
    /// [`ViewMode::EditProductForm`].
    pub edit_form: Option<ProductForm>,
}

/// Format a decimal amount as a display price.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("€{:.2}", amount.round_dp(2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use marchand_core::CategoryId;

    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Decimal::new(1000, 2)), "€10.00");
        assert_eq!(format_price(Decimal::new(5, 0)), "€5.00");
        assert_eq!(format_price(Decimal::new(1999, 3)), "€2.00");
    }

    #[test]
    fn test_cart_view_from_ledger() {
        let mut cart = CartLedger::new();
        let cap = Product {
            id: ProductId::new(1),
            name: "Cap".to_string(),
            price: Decimal::new(1050, 2),
            image_url: "/img/cap.png".to_string(),
            category_id: CategoryId::new(1),
        };
        cart.add(cap.clone());
        cart.add(cap);

        let view = CartView::from(&cart);
        assert_eq!(view.badge, 1);
        assert_eq!(view.total, "€21.00");

        let line = view.lines.first().unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, "€10.50");
        assert_eq!(line.line_total, "€21.00");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert_eq!(view.badge, 0);
        assert_eq!(view.total, "€0.00");
        assert!(view.lines.is_empty());
    }
}
