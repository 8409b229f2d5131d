//! # ordermail-builders
//!
//! Concrete email body builders for ordermail.
//!
//! Each builder is a stateless unit struct implementing the
//! `EmailBodyBuilder` port and submitting a `BuilderEntry` into the
//! `EMAIL_BODY_BUILDERS` distributed slice, so any binary or test that
//! links this crate gets the builders registered automatically via
//! `BuilderRegistry::with_builtins()`.
//!
//! The [`dispatch`] module additionally offers a static, infallible path
//! from the closed `OrderEvent` enum to its builder, bypassing string
//! keys entirely.

/// Builder for cancelled-order notification bodies
pub mod cancelled_order;
/// Static event → builder dispatch for the closed enum
pub mod dispatch;
/// Builder for new-order notification bodies
pub mod new_order;

pub use cancelled_order::CancelledOrderBuilder;
pub use dispatch::builder_for;
pub use new_order::NewOrderBuilder;
