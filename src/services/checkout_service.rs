use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::models::{Cart, OrderSnapshot};

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,

    #[error("Order was rejected: {reason}")]
    Rejected { reason: String },
}

/// Receives placed orders. What happens after submission is up to the sink.
pub trait CheckoutSink: Send + Sync {
    fn submit(&self, order: &OrderSnapshot) -> Result<(), String>;
}

/// Accepts every order and logs it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingCheckout;

impl CheckoutSink for LoggingCheckout {
    fn submit(&self, order: &OrderSnapshot) -> Result<(), String> {
        info!(
            "Order {} accepted: {} items, total {}",
            order.order_id, order.totals.total_item_count, order.totals.total_price
        );
        Ok(())
    }
}

pub struct CheckoutService {
    sink: Arc<dyn CheckoutSink>,
}

impl Default for CheckoutService {
    fn default() -> Self {
        Self::new(Arc::new(LoggingCheckout))
    }
}

impl CheckoutService {
    pub fn new(sink: Arc<dyn CheckoutSink>) -> Self {
        Self { sink }
    }

    /// Submit the cart and empty it. On rejection the cart is kept.
    pub fn place_order(&self, cart: &mut Cart) -> Result<OrderSnapshot, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = OrderSnapshot::from_cart(cart);
        info!(
            "Placing order {} with {} lines",
            order.order_id,
            order.lines.len()
        );

        self.sink.submit(&order).map_err(|reason| {
            error!("Checkout sink rejected order {}: {}", order.order_id, reason);
            CheckoutError::Rejected { reason }
        })?;

        cart.clear();
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use crate::services::CartService;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingCheckout {
        orders: Mutex<Vec<OrderSnapshot>>,
    }

    impl CheckoutSink for RecordingCheckout {
        fn submit(&self, order: &OrderSnapshot) -> Result<(), String> {
            self.orders.lock().unwrap().push(order.clone());
            Ok(())
        }
    }

    struct RejectingCheckout;

    impl CheckoutSink for RejectingCheckout {
        fn submit(&self, _order: &OrderSnapshot) -> Result<(), String> {
            Err("payment gateway offline".to_string())
        }
    }

    fn filled_cart() -> Cart {
        let catalog = Catalog::storefront();
        let carts = CartService::default();
        let mut cart = Cart::new();
        for id in [1, 2, 2] {
            carts.add_item(&mut cart, catalog.find(id).unwrap()).unwrap();
        }
        cart
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let service = CheckoutService::default();
        let mut cart = Cart::new();

        assert!(matches!(
            service.place_order(&mut cart),
            Err(CheckoutError::EmptyCart)
        ));
    }

    #[test]
    fn test_snapshot_matches_cart_and_cart_is_cleared() {
        let sink = Arc::new(RecordingCheckout::default());
        let service = CheckoutService::new(sink.clone());
        let mut cart = filled_cart();
        let expected = cart.clone();

        let order = service.place_order(&mut cart).unwrap();

        assert_eq!(order.lines, expected.lines());
        assert_eq!(order.totals, expected.totals());
        assert_eq!(order.totals.total_price, 890 + 2 * 690);
        assert!(cart.is_empty());

        let orders = sink.orders.lock().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, order.order_id);
    }

    #[test]
    fn test_rejected_order_keeps_cart() {
        let service = CheckoutService::new(Arc::new(RejectingCheckout));
        let mut cart = filled_cart();
        let before = cart.clone();

        let result = service.place_order(&mut cart);

        assert!(matches!(result, Err(CheckoutError::Rejected { .. })));
        assert_eq!(cart, before);
    }
}
