//! Cancelled-order email body builder

use ordermail_domain::constants::CANCELLED_ORDER_BUILDER;
use ordermail_domain::ports::EmailBodyBuilder;

/// Produces the body for cancelled-order notification emails
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelledOrderBuilder;

impl CancelledOrderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }
}

impl EmailBodyBuilder for CancelledOrderBuilder {
    fn build(&self) -> String {
        "cancelled order".to_string()
    }

    fn builder_name(&self) -> &'static str {
        CANCELLED_ORDER_BUILDER
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use ordermail_factory::registry::{BuilderEntry, EMAIL_BODY_BUILDERS};

#[linkme::distributed_slice(EMAIL_BODY_BUILDERS)]
static CANCELLED_ORDER_ENTRY: BuilderEntry = BuilderEntry {
    name: CANCELLED_ORDER_BUILDER,
    description: "Cancelled-order notification email body",
    factory: || std::sync::Arc::new(CancelledOrderBuilder::new()),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_output() {
        assert_eq!(CancelledOrderBuilder::new().build(), "cancelled order");
    }

    #[test]
    fn test_builder_name_matches_key() {
        assert_eq!(
            CancelledOrderBuilder::new().builder_name(),
            "CancelledOrderBuilder"
        );
    }
}
