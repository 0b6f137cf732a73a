//! # Packing Reconciliation
//!
//! Derives how many cartons a line ships in from its item quantity and the
//! units packed per carton.
//!
//! ## Partial Cartons
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quantity 20, packing 6                                                │
//! │                                                                         │
//! │   [██████] [██████] [██████] [██░░░░]                                   │
//! │      6        6        6        2      → 4 cartons, remainder warning  │
//! │                                                                         │
//! │  The warning is shown next to the carton field. It never blocks the    │
//! │  order: a partial carton may legitimately ship.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Carton count for `item_quantity` units packed `packing_quantity` per
/// carton, rounded up.
///
/// Returns `None` when the packing quantity is unknown or zero; the caller
/// then keeps whatever carton count the user last entered.
///
/// ## Example
/// ```rust
/// use hearth_core::packing::reconcile_carton_count;
///
/// assert_eq!(reconcile_carton_count(20, Some(6)), Some(4));
/// assert_eq!(reconcile_carton_count(18, Some(6)), Some(3));
/// assert_eq!(reconcile_carton_count(18, None), None);
/// ```
pub fn reconcile_carton_count(item_quantity: u32, packing_quantity: Option<u32>) -> Option<u32> {
    match packing_quantity {
        Some(per_carton) if per_carton > 0 => Some(item_quantity.div_ceil(per_carton)),
        _ => None,
    }
}

/// True when the last carton is only partly filled.
pub fn has_packing_remainder(item_quantity: u32, packing_quantity: Option<u32>) -> bool {
    match packing_quantity {
        Some(per_carton) if per_carton > 0 => item_quantity % per_carton != 0,
        _ => false,
    }
}
