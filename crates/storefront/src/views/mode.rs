//! View modes.

use marchand_core::ProductId;

/// The view the page is currently showing. Exactly one is active at a time.
///
/// `EditProductForm` carries the id of the product being edited so the
/// presenter can pre-fill the form; leaving the mode drops it - unsaved form
/// data never survives a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The storefront: catalog grid, category filter, cart panel.
    Shop,
    /// The admin login form.
    Login,
    /// The admin menu.
    Admin,
    /// The new-product form.
    AddProduct,
    /// The pick-a-product-to-edit list.
    EditProductList,
    /// The edit form for one product.
    EditProductForm(ProductId),
    /// The pick-a-product-to-delete list.
    DeleteProductList,
}

impl ViewMode {
    /// Whether this mode is one of the admin sub-flows that `cancel`
    /// returns to the admin menu from.
    #[must_use]
    pub const fn in_admin_flow(&self) -> bool {
        matches!(
            self,
            Self::AddProduct
                | Self::EditProductList
                | Self::EditProductForm(_)
                | Self::DeleteProductList
        )
    }
}
