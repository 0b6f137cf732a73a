//! # Cart State
//!
//! Shared handle to the working cart.
//!
//! ## Thread Safety
//! Commands may run from several threads; every access goes through the
//! mutex, and writes hold it for the whole edit-and-recompute step so a
//! reader never sees a line with half-updated derived fields.

use std::sync::{Arc, Mutex};

use hearth_core::Cart;

/// Managed cart state.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use hearth_core::CartTotals;
    /// use hearth_desk::state::CartState;
    ///
    /// let state = CartState::new();
    /// let totals = state.with_cart(|cart| CartTotals::from(cart));
    /// assert_eq!(totals.line_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
