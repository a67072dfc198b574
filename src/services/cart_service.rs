use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::models::{Adjustment, Cart, CartTotals, CatalogItem, ItemId};

use super::notification::{CartEvent, NotificationSink, TracingNotifier};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartServiceError {
    #[error("Invalid item: {message}")]
    InvalidItem { message: String },

    #[error("Quantity for item {id} is out of range")]
    QuantityOverflow { id: ItemId },
}

/// Applies the cart rules to a session-owned [`Cart`].
pub struct CartService {
    notifier: Arc<dyn NotificationSink>,
}

impl Default for CartService {
    fn default() -> Self {
        Self::new(Arc::new(TracingNotifier))
    }
}

impl CartService {
    pub fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        Self { notifier }
    }

    /// Add one unit of `item`, appending a new line on first add.
    ///
    /// The item is checked before the cart is touched, so a rejected item
    /// leaves the cart exactly as it was.
    pub fn add_item(
        &self,
        cart: &mut Cart,
        item: &CatalogItem,
    ) -> Result<CartTotals, CartServiceError> {
        item.validate()
            .map_err(|e| {
                warn!("Rejected item {} for cart: {}", item.id, e);
                CartServiceError::InvalidItem {
                    message: format!("item {}: {}", item.id, e),
                }
            })?;

        let quantity = cart
            .push_or_increment(item)
            .ok_or(CartServiceError::QuantityOverflow { id: item.id })?;

        debug!("Item {} now has quantity {}", item.id, quantity);
        self.notifier.notify(&CartEvent::ItemAdded {
            id: item.id,
            name: item.name.clone(),
            quantity,
        });

        Ok(cart.totals())
    }

    /// Delete the line for `id`. Unknown ids are ignored.
    pub fn remove_item(&self, cart: &mut Cart, id: ItemId) -> bool {
        let removed = cart.remove(id);
        if removed {
            info!("Removed item {} from cart", id);
        } else {
            debug!("Remove ignored, item {} is not in the cart", id);
        }
        removed
    }

    /// Change the quantity of `id` by `delta`.
    ///
    /// A line whose quantity would reach zero or below is removed.
    pub fn adjust_quantity(
        &self,
        cart: &mut Cart,
        id: ItemId,
        delta: i64,
    ) -> Result<Adjustment, CartServiceError> {
        let outcome = cart
            .adjust(id, delta)
            .ok_or(CartServiceError::QuantityOverflow { id })?;

        match outcome {
            Adjustment::Missing => debug!("Adjust ignored, item {} is not in the cart", id),
            Adjustment::Updated(quantity) => {
                debug!("Item {} quantity changed by {} to {}", id, delta, quantity)
            }
            Adjustment::Removed => info!("Item {} dropped to zero and was removed", id),
        }

        Ok(outcome)
    }

    pub fn increment(&self, cart: &mut Cart, id: ItemId) -> Result<Adjustment, CartServiceError> {
        self.adjust_quantity(cart, id, 1)
    }

    pub fn decrement(&self, cart: &mut Cart, id: ItemId) -> Result<Adjustment, CartServiceError> {
        self.adjust_quantity(cart, id, -1)
    }

    pub fn clear(&self, cart: &mut Cart) {
        cart.clear();
        info!("Cart cleared");
    }

    pub fn totals(&self, cart: &Cart) -> CartTotals {
        cart.totals()
    }
}
