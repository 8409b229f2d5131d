//! Domain layer constants
//!
//! Contains the naming-convention suffixes and the canonical builder keys
//! used by the application layer. Nothing here is configurable: the
//! convention is part of the domain contract.

// ============================================================================
// NAMING CONVENTION CONSTANTS
// ============================================================================

/// Suffix carried by every event type name (e.g. `"NewOrderEvent"`)
pub const EVENT_SUFFIX: &str = "Event";

/// Suffix carried by every builder key (e.g. `"NewOrderBuilder"`)
pub const BUILDER_SUFFIX: &str = "Builder";

// ============================================================================
// CANONICAL EVENT TYPE NAMES
// ============================================================================

/// Type name of the new-order event
pub const NEW_ORDER_EVENT: &str = "NewOrderEvent";

/// Type name of the cancelled-order event
pub const CANCELLED_ORDER_EVENT: &str = "CancelledOrderEvent";

// ============================================================================
// CANONICAL BUILDER KEYS
// ============================================================================

/// Registry key of the new-order body builder
pub const NEW_ORDER_BUILDER: &str = "NewOrderBuilder";

/// Registry key of the cancelled-order body builder
pub const CANCELLED_ORDER_BUILDER: &str = "CancelledOrderBuilder";
