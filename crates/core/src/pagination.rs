//! Offset/limit window helpers for list endpoints.

/// Number of rows returned by a list call when no `limit` is given.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Upper bound on a single list window.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Clamp a requested limit to `1..=max`, falling back to `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a requested offset to be non-negative. Absent means zero.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
