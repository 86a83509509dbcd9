//! The view-mode state machine.
//!
//! [`ViewController`] is the only component with a state machine. It owns
//! the current [`ViewMode`], consumes the catalog repository and the cart
//! ledger, and turns presenter intents into state transitions. One handler
//! per intent; every handler runs to completion before the next event is
//! processed, so there is no locking anywhere.
//!
//! Two rules hold across all handlers: a declined confirmation leaves every
//! piece of state exactly as it was, and errors never drive navigation -
//! a failed submit keeps the user on the same form.

mod capability;
mod mode;
mod snapshot;

pub use capability::{ConfirmPrompt, Notifier};
pub use mode::ViewMode;
pub use snapshot::{CartLineView, CartView, ViewState, format_price};

use marchand_core::{CategoryFilter, ProductId};

use crate::cart::{AddOutcome, CartLedger, DecreaseOutcome};
use crate::catalog::{CatalogError, CatalogRepository, ProductForm, SeedSource};
use crate::store::CatalogStore;

/// Owns the view mode and orchestrates transitions over the catalog and
/// the cart. Constructed once per browsing session; callers hold the
/// handle and pass it through - there are no ambient globals.
pub struct ViewController<S, P, N>
where
    S: CatalogStore,
    P: ConfirmPrompt,
    N: Notifier,
{
    catalog: CatalogRepository<S>,
    cart: CartLedger,
    mode: ViewMode,
    filter: CategoryFilter,
    prompt: P,
    notifier: N,
}

impl<S, P, N> ViewController<S, P, N>
where
    S: CatalogStore,
    P: ConfirmPrompt,
    N: Notifier,
{
    /// Build a controller over an already-opened catalog. Starts in
    /// [`ViewMode::Shop`] with an empty cart and no category filter.
    #[must_use]
    pub fn new(catalog: CatalogRepository<S>, prompt: P, notifier: N) -> Self {
        Self {
            catalog,
            cart: CartLedger::new(),
            mode: ViewMode::Shop,
            filter: CategoryFilter::All,
            prompt,
            notifier,
        }
    }

    /// Open the catalog and build the controller in one step. This is the
    /// session's single asynchronous boundary: the shop view waits here
    /// until the catalog is loaded or has soft-failed to empty.
    pub async fn start<D: SeedSource>(store: S, seed: &D, prompt: P, notifier: N) -> Self {
        let catalog = CatalogRepository::open(store, seed).await;
        Self::new(catalog, prompt, notifier)
    }

    /// The active view mode.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The catalog repository.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogRepository<S> {
        &self.catalog
    }

    /// The cart ledger.
    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// The injected confirmation prompt.
    #[must_use]
    pub const fn prompt(&self) -> &P {
        &self.prompt
    }

    /// The injected notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Snapshot of everything the Presenter needs for the current view.
    ///
    /// The category filter only narrows the shop grid; the admin product
    /// lists always show the whole catalog.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        let filter = match self.mode {
            ViewMode::Shop => self.filter,
            _ => CategoryFilter::All,
        };
        let visible_products = self.catalog.filter_by_category(filter);
        let edit_form = match self.mode {
            ViewMode::EditProductForm(id) => self.catalog.product(id).map(ProductForm::from_product),
            _ => None,
        };

        ViewState {
            mode: self.mode,
            categories: self.catalog.categories().to_vec(),
            visible_count: visible_products.len(),
            visible_products,
            cart: CartView::from(&self.cart),
            edit_form,
        }
    }

    // =========================================================================
    // Shop view
    // =========================================================================

    /// Change the active category filter. Only meaningful in the shop view;
    /// does not change the view mode. `0` is the "all products" sentinel.
    pub fn select_category(&mut self, raw_category_id: i32) {
        if self.mode != ViewMode::Shop {
            tracing::debug!(mode = ?self.mode, "category change outside the shop view, ignoring");
            return;
        }
        self.filter = CategoryFilter::from_raw(raw_category_id);
    }

    /// The user profile was activated: confirm, then show the login view.
    pub fn open_user_profile(&mut self) {
        if self.mode != ViewMode::Shop {
            return;
        }
        if self.prompt.confirm("Go to the administration page?") {
            self.mode = ViewMode::Login;
        }
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Submit login credentials. Any non-empty pair is accepted - this is
    /// explicitly not a security boundary.
    pub fn submit_login(&mut self, username: &str, password: &str) {
        if self.mode != ViewMode::Login {
            return;
        }
        if username.is_empty() || password.is_empty() {
            self.notifier.notify("Error", "Please fill in every field");
            return;
        }
        self.mode = ViewMode::Admin;
    }

    // =========================================================================
    // Admin menu
    // =========================================================================

    /// Show the new-product form.
    pub fn open_add_product(&mut self) {
        if self.mode == ViewMode::Admin {
            self.mode = ViewMode::AddProduct;
        }
    }

    /// Show the pick-a-product-to-edit list.
    pub fn open_edit_products(&mut self) {
        if self.mode == ViewMode::Admin {
            self.mode = ViewMode::EditProductList;
        }
    }

    /// Show the pick-a-product-to-delete list.
    pub fn open_delete_products(&mut self) {
        if self.mode == ViewMode::Admin {
            self.mode = ViewMode::DeleteProductList;
        }
    }

    /// Return from the admin menu to the shop. The category filter resets:
    /// the shop re-renders with the whole catalog visible.
    pub fn back_to_shop(&mut self) {
        if self.mode == ViewMode::Admin {
            self.mode = ViewMode::Shop;
            self.filter = CategoryFilter::All;
        }
    }

    /// Cancel out of any admin sub-flow back to the admin menu, discarding
    /// unsaved form state.
    pub fn cancel(&mut self) {
        if self.mode.in_admin_flow() {
            self.mode = ViewMode::Admin;
        }
    }

    // =========================================================================
    // Product administration
    // =========================================================================

    /// Submit the new-product form. Success returns to the admin menu; a
    /// validation failure surfaces the error and stays on the form.
    pub fn submit_new_product(&mut self, form: &ProductForm) {
        if self.mode != ViewMode::AddProduct {
            return;
        }
        match self.catalog.create(form) {
            Ok(_) => {
                self.notifier.notify("Success", "Product added successfully");
                self.mode = ViewMode::Admin;
            }
            Err(e) => {
                self.notifier.notify("Error", &e.to_string());
            }
        }
    }

    /// Pick a product from the edit list. A stale id re-renders the list.
    pub fn edit_product(&mut self, id: ProductId) {
        if self.mode != ViewMode::EditProductList {
            return;
        }
        if self.catalog.product(id).is_some() {
            self.mode = ViewMode::EditProductForm(id);
        } else {
            tracing::debug!(%id, "edit requested for a stale product id");
        }
    }

    /// Submit the edit form for the product being edited. Success returns
    /// to the admin menu; a validation failure stays on the form; a stale
    /// id falls back to the edit list.
    pub fn submit_product_update(&mut self, form: &ProductForm) {
        let ViewMode::EditProductForm(id) = self.mode else {
            return;
        };
        match self.catalog.update(id, form) {
            Ok(_) => {
                self.notifier
                    .notify("Success", "Product updated successfully");
                self.mode = ViewMode::Admin;
            }
            Err(CatalogError::Validation(e)) => {
                self.notifier.notify("Error", &e.to_string());
            }
            Err(CatalogError::NotFound(_)) => {
                self.notifier.notify("Error", "This product no longer exists");
                self.mode = ViewMode::EditProductList;
            }
        }
    }

    /// Delete a product from the delete list, after confirmation. The view
    /// stays on the (re-rendered) list.
    pub fn delete_product(&mut self, id: ProductId) {
        if self.mode != ViewMode::DeleteProductList {
            return;
        }
        if !self
            .prompt
            .confirm("Are you sure you want to delete this product?")
        {
            return;
        }
        match self.catalog.delete(id) {
            Ok(()) => {
                self.notifier
                    .notify("Success", "Product deleted successfully");
            }
            Err(e) => {
                tracing::debug!("delete failed: {e}");
            }
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add a catalog product to the cart. A stale id is ignored.
    pub fn add_to_cart(&mut self, id: ProductId) {
        let Some(product) = self.catalog.product(id).cloned() else {
            tracing::debug!(%id, "add-to-cart for a stale product id");
            return;
        };

        let name = product.name.clone();
        match self.cart.add(product) {
            AddOutcome::NewLine => {
                self.notifier
                    .notify("Success", &format!("{name} has been added to the cart"));
            }
            AddOutcome::Incremented => {
                self.notifier
                    .notify("Success", &format!("Quantity of {name} increased"));
            }
        }
    }

    /// Increase the quantity of the cart line at `index`.
    pub fn increase_quantity(&mut self, index: usize) {
        match self.cart.increase(index) {
            Ok(()) => self.notifier.notify("Success", "Quantity increased"),
            Err(e) => tracing::debug!("increase failed: {e}"),
        }
    }

    /// Decrease the quantity of the cart line at `index`. Reaching zero
    /// asks the user once whether to remove the line.
    pub fn decrease_quantity(&mut self, index: usize) {
        match self.cart.decrease(index) {
            Ok(DecreaseOutcome::Decremented) => {
                self.notifier.notify("Success", "Quantity decreased");
            }
            Ok(DecreaseOutcome::ConfirmRemoval) => {
                if self.prompt.confirm("Remove this item from the cart?")
                    && self.cart.remove(index).is_ok()
                {
                    self.notifier.notify("Success", "Product removed from the cart");
                }
            }
            Err(e) => tracing::debug!("decrease failed: {e}"),
        }
    }

    /// Remove the cart line at `index`, after confirmation.
    pub fn remove_from_cart(&mut self, index: usize) {
        if !self
            .prompt
            .confirm("Are you sure you want to remove this product from the cart?")
        {
            return;
        }
        match self.cart.remove(index) {
            Ok(()) => self.notifier.notify("Success", "Product removed from the cart"),
            Err(e) => tracing::debug!("remove failed: {e}"),
        }
    }

    /// Empty the cart, after confirmation.
    pub fn clear_cart(&mut self) {
        if !self
            .prompt
            .confirm("Are you sure you want to empty the cart?")
        {
            return;
        }
        self.cart.clear();
        self.notifier.notify("Success", "The cart has been emptied");
    }

    /// Checkout is a terminal no-op: payment is out of scope, the cart is
    /// emptied and the user is told so.
    pub fn checkout(&mut self) {
        self.notifier.notify("Success", "Checkout is not implemented");
        self.cart.clear();
    }
}
