//! Typed factory for email body builders
//!
//! Composes a [`KeySelector`] with a [`BuilderRegistry`]: the selector
//! turns an event into a registry key, the registry turns the key into a
//! builder instance. Key derivation itself never fails; only the lookup
//! can, with [`Error::Resolution`](ordermail_domain::Error::Resolution).

use std::sync::Arc;

use ordermail_domain::error::Result;
use ordermail_domain::events::EmailEvent;
use ordermail_domain::ports::EmailBodyBuilder;
use tracing::debug;

use crate::registry::BuilderRegistry;
use crate::resolver::{EventNameSelector, KeySelector};

/// Resolves the email body builder matching an event
///
/// Owns its registry and selection strategy; constructed once at startup
/// and passed by reference to whatever needs it.
pub struct EmailBodyFactory {
    registry: BuilderRegistry,
    selector: Box<dyn KeySelector>,
}

impl EmailBodyFactory {
    /// Create a factory using the default name-convention selector
    pub fn new(registry: BuilderRegistry) -> Self {
        Self::with_selector(registry, Box::new(EventNameSelector::new()))
    }

    /// Create a factory with a custom key selection strategy
    pub fn with_selector(registry: BuilderRegistry, selector: Box<dyn KeySelector>) -> Self {
        Self { registry, selector }
    }

    /// Resolve the builder matching `event`
    ///
    /// # Errors
    /// Returns [`Error::Resolution`](ordermail_domain::Error::Resolution)
    /// when the derived key has no registered builder.
    pub fn get_by_email_type(&self, event: &dyn EmailEvent) -> Result<Arc<dyn EmailBodyBuilder>> {
        let key = self.selector.builder_key(event);
        debug!(
            event_type = event.event_type_name(),
            key = %key,
            "Derived builder key from event"
        );
        self.registry.resolve(&key)
    }

    /// The underlying registry, for introspection
    pub fn registry(&self) -> &BuilderRegistry {
        &self.registry
    }
}
