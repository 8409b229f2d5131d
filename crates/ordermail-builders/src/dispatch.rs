//! Static event → builder dispatch
//!
//! The registry path resolves by string key and can fail at lookup time.
//! For the closed `OrderEvent` enum the mapping is known at compile time,
//! so this path is exhaustive and infallible: adding a variant without a
//! builder arm is a build error.

use std::sync::Arc;

use ordermail_domain::events::OrderEvent;
use ordermail_domain::ports::EmailBodyBuilder;

use crate::cancelled_order::CancelledOrderBuilder;
use crate::new_order::NewOrderBuilder;

/// The builder for a known order event kind
pub fn builder_for(event: OrderEvent) -> Arc<dyn EmailBodyBuilder> {
    match event {
        OrderEvent::NewOrder => Arc::new(NewOrderBuilder::new()),
        OrderEvent::CancelledOrder => Arc::new(CancelledOrderBuilder::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_new_order() {
        assert_eq!(builder_for(OrderEvent::NewOrder).build(), "order body");
    }

    #[test]
    fn test_dispatch_cancelled_order() {
        assert_eq!(
            builder_for(OrderEvent::CancelledOrder).build(),
            "cancelled order"
        );
    }

    #[test]
    fn test_dispatch_agrees_with_registered_names() {
        for event in OrderEvent::ALL {
            assert_eq!(builder_for(event).builder_name(), event.builder_key());
        }
    }
}
