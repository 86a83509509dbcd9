//! Shopping cart ledger.
//!
//! The cart is ephemeral: it lives for one browsing session and is never
//! persisted. Lines hold a captured snapshot of the product as it was when
//! added, so deleting a product from the catalog leaves any existing cart
//! line renderable.
//!
//! Lines are addressed by their position in insertion order. That index is
//! only stable as long as no line is removed between render and action - a
//! known coupling with the presenter, kept as the explicit contract; stale
//! indices are rejected, never panicked on.

use rust_decimal::Decimal;
use thiserror::Error;

use marchand_core::Product;

/// Errors from index-addressed cart operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// The index does not name a current cart line.
    #[error("no cart line at position {0}")]
    LineOutOfRange(usize),
}

/// Which branch [`CartLedger::add`] took, so the caller can word the
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1.
    NewLine,
    /// An existing line's quantity was incremented.
    Incremented,
}

/// Result of [`CartLedger::decrease`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecreaseOutcome {
    /// Quantity was above 1 and has been decremented.
    Decremented,
    /// Quantity is 1: the ledger did not remove the line. The caller must
    /// confirm with the user and call [`CartLedger::remove`] explicitly.
    ConfirmRemoval,
}

/// One cart entry: a product snapshot and a quantity of at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Exact price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The in-memory shopping cart.
///
/// Invariants: at most one line per product id, quantities stay at 1 or
/// above while a line exists, and lines keep insertion order (a later
/// quantity increase does not reorder).
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product: increments the existing line for this product id, or
    /// appends a new line with quantity 1.
    pub fn add(&mut self, product: Product) -> AddOutcome {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            AddOutcome::Incremented
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
            AddOutcome::NewLine
        }
    }

    /// Increment the quantity of the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] for a stale index.
    pub fn increase(&mut self, index: usize) -> Result<(), CartError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CartError::LineOutOfRange(index))?;
        line.quantity += 1;
        Ok(())
    }

    /// Decrement the quantity of the line at `index`.
    ///
    /// A quantity-1 line is never removed here: the caller gets
    /// [`DecreaseOutcome::ConfirmRemoval`] and decides.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] for a stale index.
    pub fn decrease(&mut self, index: usize) -> Result<DecreaseOutcome, CartError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CartError::LineOutOfRange(index))?;

        if line.quantity > 1 {
            line.quantity -= 1;
            Ok(DecreaseOutcome::Decremented)
        } else {
            Ok(DecreaseOutcome::ConfirmRemoval)
        }
    }

    /// Delete the line at `index` unconditionally. Any confirmation policy
    /// is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] for a stale index.
    pub fn remove(&mut self, index: usize) -> Result<(), CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineOutOfRange(index));
        }
        self.lines.remove(index);
        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Exact cart total. Display rounding happens in the presenter
    /// snapshot, not here, so repeated reads never compound rounding error.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct lines. The cart badge shows this count, not the
    /// summed quantities.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use marchand_core::{CategoryId, ProductId};

    use super::*;

    fn product(id: i32, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price,
            image_url: format!("/img/{id}.png"),
            category_id: CategoryId::new(1),
        }
    }

    #[test]
    fn test_add_same_product_merges_into_one_line() {
        let mut cart = CartLedger::new();
        let cap = product(1, Decimal::new(1000, 2));

        assert_eq!(cart.add(cap.clone()), AddOutcome::NewLine);
        assert_eq!(cart.add(cap), AddOutcome::Incremented);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 2);
        assert_eq!(cart.total(), Decimal::new(2000, 2));
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = CartLedger::new();
        cart.add(product(1, Decimal::ONE));
        cart.add(product(2, Decimal::ONE));
        // Increasing the first line later must not reorder
        cart.add(product(1, Decimal::ONE));

        let ids: Vec<i32> = cart
            .lines()
            .iter()
            .map(|l| l.product.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut cart = CartLedger::new();
        cart.add(product(1, Decimal::ONE));

        cart.increase(0).unwrap();
        assert_eq!(cart.lines().first().unwrap().quantity, 2);

        assert_eq!(cart.decrease(0).unwrap(), DecreaseOutcome::Decremented);
        assert_eq!(cart.lines().first().unwrap().quantity, 1);
    }

    #[test]
    fn test_decrease_at_quantity_one_never_removes_by_itself() {
        let mut cart = CartLedger::new();
        cart.add(product(1, Decimal::ONE));

        assert_eq!(cart.decrease(0).unwrap(), DecreaseOutcome::ConfirmRemoval);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_deletes_the_line() {
        let mut cart = CartLedger::new();
        cart.add(product(1, Decimal::ONE));
        cart.add(product(2, Decimal::ONE));

        cart.remove(0).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines().first().unwrap().product.id.as_i32(), 2);
    }

    #[test]
    fn test_stale_index_is_rejected() {
        let mut cart = CartLedger::new();
        cart.add(product(1, Decimal::ONE));

        assert_eq!(cart.increase(5), Err(CartError::LineOutOfRange(5)));
        assert_eq!(cart.decrease(5), Err(CartError::LineOutOfRange(5)));
        assert_eq!(cart.remove(5), Err(CartError::LineOutOfRange(5)));
    }

    #[test]
    fn test_total_is_exact() {
        let mut cart = CartLedger::new();
        // 0.10 added three times is exactly 0.30 in decimal arithmetic
        let penny_candy = product(1, Decimal::new(10, 2));
        cart.add(penny_candy.clone());
        cart.add(penny_candy.clone());
        cart.add(penny_candy);

        assert_eq!(cart.total(), Decimal::new(30, 2));
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = CartLedger::new();
        cart.add(product(1, Decimal::ONE));
        cart.add(product(2, Decimal::ONE));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_line_count_counts_lines_not_units() {
        let mut cart = CartLedger::new();
        let cap = product(1, Decimal::ONE);
        cart.add(cap.clone());
        cart.add(cap);
        cart.add(product(2, Decimal::ONE));

        // 3 units across 2 lines: the badge shows 2
        assert_eq!(cart.line_count(), 2);
    }
}
