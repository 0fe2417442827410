//! Shared query parameter types for API handlers.

use lore_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use serde::Deserialize;

/// Offset pagination parameters (`?skip=&limit=`).
///
/// Out-of-range values are clamped rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Number of rows to skip, never negative.
    pub fn offset(&self) -> i64 {
        clamp_offset(self.skip)
    }

    /// Window size in `1..=MAX_LIST_LIMIT`, defaulting to `DEFAULT_LIST_LIMIT`.
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT)
    }
}
