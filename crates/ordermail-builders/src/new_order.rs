//! New-order email body builder

use ordermail_domain::constants::NEW_ORDER_BUILDER;
use ordermail_domain::ports::EmailBodyBuilder;

/// Produces the body for new-order notification emails
#[derive(Debug, Clone, Copy, Default)]
pub struct NewOrderBuilder;

impl NewOrderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }
}

impl EmailBodyBuilder for NewOrderBuilder {
    fn build(&self) -> String {
        "order body".to_string()
    }

    fn builder_name(&self) -> &'static str {
        NEW_ORDER_BUILDER
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use ordermail_factory::registry::{BuilderEntry, EMAIL_BODY_BUILDERS};

#[linkme::distributed_slice(EMAIL_BODY_BUILDERS)]
static NEW_ORDER_ENTRY: BuilderEntry = BuilderEntry {
    name: NEW_ORDER_BUILDER,
    description: "New-order notification email body",
    factory: || std::sync::Arc::new(NewOrderBuilder::new()),
};
