use std::fmt;

use tracing::info;

use crate::models::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded {
        id: ItemId,
        name: String,
        quantity: u32,
    },
}

impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartEvent::ItemAdded { name, .. } => write!(f, "{} added to cart", name),
        }
    }
}

/// One-way receiver for cart confirmations. Delivery is best effort.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, event: &CartEvent);
}

/// Writes every event to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, event: &CartEvent) {
        info!("{}", event);
    }
}
