use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::{Cart, CartLine, CartTotals};

/// Frozen view of a cart handed to checkout. Totals always match `lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl OrderSnapshot {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            lines: cart.lines().to_vec(),
            totals: cart.totals(),
        }
    }
}
