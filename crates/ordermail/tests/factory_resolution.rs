//! Factory Resolution Integration Tests
//!
//! End-to-end tests for the bootstrap → derive-key → resolve → build
//! pipeline, exercised through the facade crate. The facade links
//! `ordermail-builders`, so the linkme registration entries are present
//! and `build_factory()` sees the full builder set.
//!
//! Run with: `cargo test -p ordermail --test factory_resolution`

use ordermail::builders::builder_for;
use ordermail::domain::{EmailEvent, Error, OrderEvent};
use ordermail::factory::registry::{BuilderRegistry, list_builder_entries};
use ordermail::factory::{build_factory, derive_builder_key};

/// Test-only marker event with no registered builder.
struct GhostEvent;

impl EmailEvent for GhostEvent {
    fn event_type_name(&self) -> &'static str {
        "GhostEvent"
    }
}

#[test]
fn cancelled_order_event_resolves_to_cancelled_order_builder() {
    let factory = build_factory().unwrap();
    let builder = factory
        .get_by_email_type(&OrderEvent::CancelledOrder)
        .unwrap();
    assert_eq!(builder.builder_name(), "CancelledOrderBuilder");
    assert_eq!(builder.build(), "cancelled order");
}

#[test]
fn new_order_event_resolves_to_new_order_builder() {
    let factory = build_factory().unwrap();
    let builder = factory.get_by_email_type(&OrderEvent::NewOrder).unwrap();
    assert_eq!(builder.builder_name(), "NewOrderBuilder");
    assert_eq!(builder.build(), "order body");
}

#[test]
fn unregistered_event_fails_with_resolution_error() {
    let factory = build_factory().unwrap();
    let err = factory.get_by_email_type(&GhostEvent).unwrap_err();
    match err {
        Error::Resolution { key, available } => {
            assert_eq!(key, "GhostBuilder");
            assert!(available.contains(&"NewOrderBuilder".to_string()));
            assert!(available.contains(&"CancelledOrderBuilder".to_string()));
        }
        other => panic!("expected Resolution error, got: {other}"),
    }
}

#[test]
fn repeated_resolution_yields_identical_bodies() {
    let factory = build_factory().unwrap();
    let first = factory.get_by_email_type(&OrderEvent::NewOrder).unwrap();
    let second = factory.get_by_email_type(&OrderEvent::NewOrder).unwrap();
    assert_eq!(first.build(), second.build());
}

#[test]
fn name_without_event_substring_maps_to_itself() {
    assert_eq!(derive_builder_key("OrderShipped"), "OrderShipped");
}

#[test]
fn linkme_entries_are_visible_through_the_facade() {
    let entries = list_builder_entries();
    let names: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
    assert!(names.contains(&"NewOrderBuilder"));
    assert!(names.contains(&"CancelledOrderBuilder"));
}

#[test]
fn with_builtins_registers_every_entry_exactly_once() {
    let registry = BuilderRegistry::with_builtins().unwrap();
    assert_eq!(registry.len(), list_builder_entries().len());
    assert_eq!(
        registry.builder_names(),
        vec![
            "CancelledOrderBuilder".to_string(),
            "NewOrderBuilder".to_string()
        ]
    );
}

#[test]
fn static_dispatch_agrees_with_registry_resolution() {
    let factory = build_factory().unwrap();
    for event in OrderEvent::ALL {
        let via_registry = factory.get_by_email_type(&event).unwrap();
        let via_dispatch = builder_for(event);
        assert_eq!(via_registry.build(), via_dispatch.build());
    }
}

#[test]
fn every_known_event_resolves_through_the_convention() {
    let factory = build_factory().unwrap();
    for event in OrderEvent::ALL {
        let builder = factory.get_by_email_type(&event).unwrap();
        assert_eq!(builder.builder_name(), event.builder_key());
    }
}
