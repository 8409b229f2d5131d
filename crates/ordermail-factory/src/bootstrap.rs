//! Registry bootstrap
//!
//! Builds the factory from the auto-registration slice. The caller must
//! link a crate that submits builder entries (`ordermail-builders`) for
//! the slice to be populated.

use ordermail_domain::error::Result;
use tracing::info;

use crate::factory::EmailBodyFactory;
use crate::registry::BuilderRegistry;

/// Build an [`EmailBodyFactory`] from the registered builder entries
///
/// Instantiates every builder in the linkme slice once and wires the
/// default name-convention selector.
pub fn build_factory() -> Result<EmailBodyFactory> {
    let registry = BuilderRegistry::with_builtins()?;
    info!(
        builders = registry.len(),
        "Email body builder registry initialized"
    );
    Ok(EmailBodyFactory::new(registry))
}
