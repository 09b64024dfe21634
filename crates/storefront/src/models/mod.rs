//! Domain models for storefront.

/// Session keys used by the storefront.
pub mod session_keys {
    /// The persisted cart document - a JSON array of cart items - lives
    /// under this single key. There is no other persisted state.
    pub const CART_ITEMS: &str = "cartItems";
}
