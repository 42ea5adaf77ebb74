//! Application-wide constants.

/// Provider source used when the caller does not specify one. Matches the
/// sandbox mobile-money operator the sync pipeline is wired to by default.
pub const DEFAULT_PROVIDER_SOURCE: &str = "mtn_momo";

/// Sync type recorded on audit log entries created by the orchestrator.
pub const SYNC_TYPE_TRANSACTIONS: &str = "TRANSACTIONS";

/// Upper bound on candidates fetched from the provider in one run.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Currency reported by the sandbox provider.
pub const DEFAULT_CURRENCY: &str = "GHS";

/// Hard ceiling on classifier confidence. A heuristic match is never
/// reported as certain.
pub const MAX_CONFIDENCE: i32 = 95;

/// Catalog matches scoring below this confidence are discarded in favor of
/// the fallback heuristic.
pub const FALLBACK_CONFIDENCE_THRESHOLD: i32 = 40;

/// Display-name length bounds for linked accounts.
pub const DISPLAY_NAME_MIN_LEN: usize = 2;
pub const DISPLAY_NAME_MAX_LEN: usize = 50;

/// Sentinel merchant name when extraction finds nothing usable.
pub const UNKNOWN_MERCHANT: &str = "Unknown Merchant";

/// Icon assigned to synthesized categories with no explicit mapping.
pub const DEFAULT_CATEGORY_ICON: &str = "tag";
