//! `/health`: service version plus database reachability.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use lore_db::repositories::CharacterRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the `characters` table answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Stored character count; `null` when the database is unreachable.
    pub characters: Option<i64>,
}

/// GET /health
///
/// Backed by a row count on `characters`; a missing schema reports as
/// degraded.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let characters = match CharacterRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };
    let db_healthy = characters.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        characters,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
