//! Key derivation from event type names
//!
//! The convention: an event type name maps to a builder key by replacing
//! the `"Event"` suffix with `"Builder"`. The selector trait is the seam
//! that lets callers swap the convention for another strategy.

use ordermail_domain::events::EmailEvent;
use ordermail_domain::{BUILDER_SUFFIX, EVENT_SUFFIX};

/// Derive a builder key from an event type name
///
/// Replaces every occurrence of the literal substring `"Event"` with
/// `"Builder"`. A name without the substring maps to itself; this is a
/// no-op, not an error.
///
/// The replace-all behavior is a known hazard of the convention: a name
/// containing `"Event"` anywhere other than the suffix is transformed at
/// every occurrence (`"EventLogEvent"` → `"BuilderLogBuilder"`). Kept
/// as-is; callers own their naming discipline.
pub fn derive_builder_key(type_name: &str) -> String {
    type_name.replace(EVENT_SUFFIX, BUILDER_SUFFIX)
}

/// Strategy for deriving a registry key from an event
///
/// Object-safe so factories can hold `Box<dyn KeySelector>` and swap the
/// strategy at construction time.
pub trait KeySelector: Send + Sync {
    /// The registry key to resolve for this event
    fn builder_key(&self, event: &dyn EmailEvent) -> String;
}

/// Default selector: applies the `"Event"` → `"Builder"` name convention
#[derive(Debug, Clone, Copy, Default)]
pub struct EventNameSelector;

impl EventNameSelector {
    /// Create a new selector
    pub fn new() -> Self {
        Self
    }
}

impl KeySelector for EventNameSelector {
    fn builder_key(&self, event: &dyn EmailEvent) -> String {
        derive_builder_key(event.event_type_name())
    }
}
