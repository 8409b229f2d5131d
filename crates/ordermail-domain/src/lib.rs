//! # ordermail-domain
//!
//! Domain layer for ordermail - core types shared by every other crate in
//! the workspace.
//!
//! This crate is dependency-light by design: it defines the order event
//! types, the email body builder port, the domain error type, and the
//! naming-convention constants. It knows nothing about registries,
//! factories, or concrete builders - those live in the outer layers.

/// Naming-convention constants shared across the workspace
pub mod constants;
/// Error handling types
pub mod error;
/// Order event types and the event naming trait
pub mod events;
/// Boundary contracts implemented by the outer layers
pub mod ports;

// Re-export commonly used types for convenience
pub use constants::{BUILDER_SUFFIX, EVENT_SUFFIX};
pub use error::{Error, Result};
pub use events::{EmailEvent, OrderEvent};
pub use ports::EmailBodyBuilder;
