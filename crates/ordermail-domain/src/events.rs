//! Order event types
//!
//! The original mechanism dispatched on the *runtime type name* of marker
//! objects. Here the known event kinds form a closed enum, and the name
//! semantics survive through the [`EmailEvent`] trait: anything that can
//! report an event type name can be resolved, which keeps the door open for
//! test-only marker events without widening the domain enum.

use crate::constants::{
    CANCELLED_ORDER_BUILDER, CANCELLED_ORDER_EVENT, NEW_ORDER_BUILDER, NEW_ORDER_EVENT,
};

/// A value whose event type name drives builder resolution
///
/// Only the name matters; implementors carry no data relevant to
/// resolution. Marker structs outside this crate can implement the trait
/// to participate in resolution.
pub trait EmailEvent {
    /// The event type name used to derive the builder key
    /// (e.g. `"NewOrderEvent"`)
    fn event_type_name(&self) -> &'static str;
}

/// The closed set of order events known to the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderEvent {
    /// A new order was placed
    NewOrder,
    /// An existing order was cancelled
    CancelledOrder,
}

impl OrderEvent {
    /// All known event kinds, in declaration order
    pub const ALL: [OrderEvent; 2] = [OrderEvent::NewOrder, OrderEvent::CancelledOrder];

    /// The builder key for this event kind
    ///
    /// Exhaustive compile-time mapping: adding a variant without a key is a
    /// build error, so this path has no unresolvable-key failure mode.
    pub fn builder_key(self) -> &'static str {
        match self {
            OrderEvent::NewOrder => NEW_ORDER_BUILDER,
            OrderEvent::CancelledOrder => CANCELLED_ORDER_BUILDER,
        }
    }
}

impl EmailEvent for OrderEvent {
    fn event_type_name(&self) -> &'static str {
        match self {
            OrderEvent::NewOrder => NEW_ORDER_EVENT,
            OrderEvent::CancelledOrder => CANCELLED_ORDER_EVENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names_carry_event_suffix() {
        for event in OrderEvent::ALL {
            assert!(event.event_type_name().ends_with("Event"));
        }
    }

    #[test]
    fn test_builder_keys_carry_builder_suffix() {
        for event in OrderEvent::ALL {
            assert!(event.builder_key().ends_with("Builder"));
        }
    }

    #[test]
    fn test_new_order_names() {
        assert_eq!(OrderEvent::NewOrder.event_type_name(), "NewOrderEvent");
        assert_eq!(OrderEvent::NewOrder.builder_key(), "NewOrderBuilder");
    }

    #[test]
    fn test_cancelled_order_names() {
        assert_eq!(
            OrderEvent::CancelledOrder.event_type_name(),
            "CancelledOrderEvent"
        );
        assert_eq!(
            OrderEvent::CancelledOrder.builder_key(),
            "CancelledOrderBuilder"
        );
    }
}
