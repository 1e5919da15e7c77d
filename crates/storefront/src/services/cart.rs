//! Cart store: service id → line with quantity.
//!
//! Lines are kept in insertion order, uniquely keyed by service id. Adding
//! an entry already present increments its quantity; there is deliberately
//! no decrement-by-one operation, only whole-line removal - whether one
//! belongs in the product is an open question (see DESIGN.md), so the store
//! does not invent it.
//!
//! Every mutation mirrors the collection to the cart storage slot. The
//! mirroring is best-effort, not a transaction: a write failure is logged
//! and the in-memory mutation stands.

use std::sync::Mutex;

use tracing::{error, instrument, warn};

use servex_core::{Price, ServiceId};

use crate::models::{CartItem, Service};
use crate::storage::{SharedStore, slots};

/// Process-wide cart state.
pub struct CartStore {
    storage: SharedStore,
    items: Mutex<Vec<CartItem>>,
}

impl CartStore {
    /// Create the store, recovering the cart from the cart slot.
    ///
    /// A slot that fails to deserialize is cleared and logged; the cart
    /// starts empty. Never fails.
    #[must_use]
    pub fn new(storage: SharedStore) -> Self {
        let items = Self::recover(&storage);
        Self {
            storage,
            items: Mutex::new(items),
        }
    }

    fn recover(storage: &SharedStore) -> Vec<CartItem> {
        let blob = match storage.get(slots::CART) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read cart slot, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<CartItem>>(&blob) {
            Ok(items) if items.iter().all(|i| i.quantity >= 1) => items,
            Ok(_) => {
                warn!("Cart slot holds a zero-quantity line, discarding");
                Self::clear_slot(storage);
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Corrupt cart slot, discarding");
                Self::clear_slot(storage);
                Vec::new()
            }
        }
    }

    fn clear_slot(storage: &SharedStore) {
        if let Err(e) = storage.remove(slots::CART) {
            warn!(error = %e, "Failed to clear corrupt cart slot");
        }
    }

    /// Add one unit of `service` to the cart.
    ///
    /// Increments the existing line's quantity, or inserts a new line with
    /// quantity 1. Always succeeds.
    #[instrument(skip(self, service), fields(service_id = %service.id))]
    pub fn add_item(&self, service: &Service) {
        let mut items = self.lock_items();
        if let Some(line) = items.iter_mut().find(|i| i.service.id == service.id) {
            line.quantity += 1;
        } else {
            items.push(CartItem::new(service.clone()));
        }
        self.persist(&items);
    }

    /// Remove the whole line for `service_id`, if present.
    ///
    /// Idempotent: removing an absent id is a silent no-op and writes
    /// nothing.
    #[instrument(skip(self))]
    pub fn remove_item(&self, service_id: &ServiceId) {
        let mut items = self.lock_items();
        let before = items.len();
        items.retain(|i| &i.service.id != service_id);
        if items.len() != before {
            self.persist(&items);
        }
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        let mut items = self.lock_items();
        items.clear();
        self.persist(&items);
    }

    /// Whether a line for `service_id` exists.
    #[must_use]
    pub fn is_in_cart(&self, service_id: &ServiceId) -> bool {
        self.lock_items().iter().any(|i| &i.service.id == service_id)
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lock_items().iter().map(|i| i.quantity).sum()
    }

    /// Sum over lines of unit price × quantity. `$0.00` for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lock_items().iter().map(CartItem::line_price).sum()
    }

    /// Snapshot of the lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.lock_items().clone()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_items().is_empty()
    }

    fn persist(&self, items: &[CartItem]) {
        let blob = match serde_json::to_string(items) {
            Ok(blob) => blob,
            Err(e) => {
                error!(error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.set(slots::CART, &blob) {
            error!(error = %e, "Failed to persist cart");
        }
    }

    fn lock_items(&self) -> std::sync::MutexGuard<'_, Vec<CartItem>> {
        self.items
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
