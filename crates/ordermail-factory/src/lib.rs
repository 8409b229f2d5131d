//! # ordermail-factory
//!
//! Builder registry and typed factory for ordermail.
//!
//! This crate is the application layer of the workspace: it owns the
//! name → builder registry, the key-derivation resolver, and the typed
//! factory that composes the two into the public
//! [`EmailBodyFactory::get_by_email_type`](factory::EmailBodyFactory::get_by_email_type)
//! operation.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                    Builder Resolution Flow                     │
//! ├────────────────────────────────────────────────────────────────┤
//! │                                                                │
//! │  1. Builder defines:  #[linkme::distributed_slice(             │
//! │                           EMAIL_BODY_BUILDERS)]                │
//! │                       static ENTRY: BuilderEntry = ...         │
//! │                             ↓                                  │
//! │  2. Bootstrap loads:  BuilderRegistry::with_builtins()         │
//! │                             ↓                                  │
//! │  3. Caller resolves:  factory.get_by_email_type(&event)        │
//! │                             ↓                                  │
//! │  4. Selector derives: "NewOrderEvent" → "NewOrderBuilder"      │
//! │                             ↓                                  │
//! │  5. Registry returns: Arc<dyn EmailBodyBuilder>                │
//! │                                                                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note: the linkme slice is only populated in binaries and tests that
//! link a crate submitting entries (`ordermail-builders`). Crates that
//! don't link it see an empty slice and should register builders
//! explicitly.

/// Registry construction from the auto-registration slice
pub mod bootstrap;
/// Typed factory composing selector and registry
pub mod factory;
/// Logging initialization
pub mod logging;
/// Name → builder registry and auto-registration entries
pub mod registry;
/// Key derivation from event type names
pub mod resolver;

pub use bootstrap::build_factory;
pub use factory::EmailBodyFactory;
pub use registry::{BuilderEntry, BuilderRegistry, EMAIL_BODY_BUILDERS, list_builder_entries};
pub use resolver::{EventNameSelector, KeySelector, derive_builder_key};
