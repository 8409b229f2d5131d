//! Builder Registry
//!
//! Auto-registration system for email body builders. Builders register
//! themselves via `linkme` distributed-slice entries and are collected
//! into a [`BuilderRegistry`] at startup. The registry is an explicit,
//! owned table - no global mutable state, no framework-mediated
//! resolution.

use std::collections::HashMap;
use std::sync::Arc;

use ordermail_domain::error::{Error, Result};
use ordermail_domain::ports::EmailBodyBuilder;
use tracing::debug;

/// Registry entry for email body builders
///
/// Each builder implementation registers itself with this entry using a
/// `#[linkme::distributed_slice(EMAIL_BODY_BUILDERS)]` static. The entry
/// contains metadata and a factory function to create the builder
/// instance.
pub struct BuilderEntry {
    /// Unique builder key (e.g. "NewOrderBuilder")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the builder instance
    pub factory: fn() -> Arc<dyn EmailBodyBuilder>,
}

// Auto-collection via linkme - builders submit entries at compile time
#[linkme::distributed_slice]
pub static EMAIL_BODY_BUILDERS: [BuilderEntry] = [..];

/// List all registered builder entries
///
/// Returns (name, description) tuples for every entry in the slice.
/// Useful for diagnostics and admin output.
pub fn list_builder_entries() -> Vec<(&'static str, &'static str)> {
    EMAIL_BODY_BUILDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

/// Immutable-after-init mapping from builder key to shared builder instance
///
/// Populated once at startup (from the linkme slice or by explicit
/// `register` calls), then read-only for the scope of resolution. Builders
/// are stored as shared `Arc` instances; resolution clones the `Arc`.
#[derive(Default)]
pub struct BuilderRegistry {
    builders: HashMap<String, Arc<dyn EmailBodyBuilder>>,
}

impl BuilderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Create a registry populated from the auto-registration slice
    ///
    /// Each entry's factory is invoked exactly once. Duplicate entry names
    /// fail with [`Error::DuplicateBuilder`].
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for entry in EMAIL_BODY_BUILDERS {
            registry.register(entry.name, (entry.factory)())?;
        }
        Ok(registry)
    }

    /// Register a builder under a unique key
    ///
    /// # Errors
    /// Returns [`Error::DuplicateBuilder`] if the key is already taken.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        builder: Arc<dyn EmailBodyBuilder>,
    ) -> Result<()> {
        let key = key.into();
        if self.builders.contains_key(&key) {
            return Err(Error::duplicate_builder(key));
        }
        debug!(key = %key, "Registered email body builder");
        self.builders.insert(key, builder);
        Ok(())
    }

    /// Resolve the builder registered under `key`
    ///
    /// # Errors
    /// Returns [`Error::Resolution`] listing the available keys when `key`
    /// is unregistered.
    pub fn resolve(&self, key: &str) -> Result<Arc<dyn EmailBodyBuilder>> {
        self.builders.get(key).cloned().ok_or_else(|| {
            debug!(key = %key, "Builder key not found in registry");
            Error::resolution(key, self.builder_names())
        })
    }

    /// Whether a builder is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.builders.contains_key(key)
    }

    /// Registered keys, sorted for stable output
    pub fn builder_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.builders.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered builders
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}
