//! Domain constants and default tuning values

/// Default freshness window for cached calendar data, in minutes. A cache
/// entry older than this is still servable but triggers a background refresh
/// on the next load.
pub const DEFAULT_FRESHNESS_MINUTES: u32 = 15;

/// Days of padding applied to each side of a requested window so adjacent
/// month/week navigation is pre-warmed.
pub const DEFAULT_WINDOW_PAD_DAYS: u32 = 7;

/// Default timeout for backend and provider-relay calls, in seconds. A
/// timeout classifies as a transient network failure.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
