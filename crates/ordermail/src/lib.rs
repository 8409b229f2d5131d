//! # ordermail
//!
//! Order-event email body factory: given an order event, resolve the
//! matching email body builder by naming convention (event type name with
//! the `"Event"` suffix replaced by `"Builder"`) and produce the body
//! string.
//!
//! This crate is the public facade. It re-exports the layered crates and,
//! importantly, links `ordermail-builders` so the linkme registration
//! entries are present in any binary depending on `ordermail`.
//!
//! ## Example
//!
//! ```
//! use ordermail::domain::OrderEvent;
//! use ordermail::factory::build_factory;
//!
//! let factory = build_factory().unwrap();
//! let builder = factory.get_by_email_type(&OrderEvent::NewOrder).unwrap();
//! assert_eq!(builder.build(), "order body");
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a clean-architecture split:
//!
//! - `domain` - event types, builder port, domain errors
//! - `factory` - registry, key resolver, typed factory, bootstrap
//! - `builders` - concrete builder implementations and static dispatch

/// Domain layer - event types, builder port, and domain errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ordermail_domain::*;
}

/// Factory layer - registry, resolver, and typed factory
///
/// Re-exports from the factory crate for convenience
pub mod factory {
    pub use ordermail_factory::*;
}

/// Builders layer - concrete email body builders
///
/// Re-exports from the builders crate for convenience
pub mod builders {
    pub use ordermail_builders::*;
}

// Commonly used types at the crate root
pub use ordermail_domain::{EmailBodyBuilder, EmailEvent, Error, OrderEvent, Result};
pub use ordermail_factory::{EmailBodyFactory, build_factory};
