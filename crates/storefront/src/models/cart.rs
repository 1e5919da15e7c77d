//! Cart line types.

use serde::{Deserialize, Serialize};

use servex_core::Price;

use super::Service;

/// One catalog entry's accumulated quantity within the active cart.
///
/// Lines are keyed by `service.id`; the cart store guarantees no two lines
/// share an id and that quantity never drops below 1 (a line is removed
/// whole, never decremented to zero).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Snapshot of the catalog entry at the time it was added.
    pub service: Service,
    /// Always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// A fresh line for `service` with quantity 1.
    #[must_use]
    pub const fn new(service: Service) -> Self {
        Self {
            service,
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.service.price.mul_quantity(self.quantity)
    }
}
