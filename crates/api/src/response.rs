//! Shared response payload types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` confirmation body for operations with no entity to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
