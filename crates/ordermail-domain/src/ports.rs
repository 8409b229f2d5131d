//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers, following
//! the Dependency Inversion Principle: the domain defines the interface,
//! the builders crate implements it.

/// Capability port: produce an email body string
///
/// Implementations are stateless and side-effect free. The port is
/// synchronous by contract - resolution and building never suspend.
/// `Send + Sync` lets registries share builder instances across threads
/// once registration is complete; `Debug` keeps trait objects usable in
/// assertions and log output.
pub trait EmailBodyBuilder: std::fmt::Debug + Send + Sync {
    /// Produce the email body
    fn build(&self) -> String;

    /// Self-reported name, matching the key this builder registers under
    fn builder_name(&self) -> &'static str;
}
