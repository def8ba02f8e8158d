use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::error::ApiError;
use crate::infra::{cache, db};
use crate::state::AppState;

#[derive(Serialize)]
pub struct DatabaseTimeResponse {
    pub success: bool,
    #[serde(serialize_with = "nikufam_core::serde::to_rfc3339_ms")]
    pub time: chrono::DateTime<chrono::Utc>,
}

// ── GET /api/test ────────────────────────────────────────────────────────────

/// Round-trip to Postgres, returning its clock.
pub async fn database_time(
    State(state): State<AppState>,
) -> Result<Json<DatabaseTimeResponse>, ApiError> {
    let time = db::database_time(&state.db, state.store_timeout).await?;
    Ok(Json(DatabaseTimeResponse {
        success: true,
        time,
    }))
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Ready only while both Postgres and Redis answer.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    let (database, redis) = tokio::join!(
        db::ping(&state.db, state.store_timeout),
        cache::ping(&state.redis, state.store_timeout),
    );
    let mut ready = true;
    if let Err(e) = database {
        tracing::warn!(error = ?e, "database not ready");
        ready = false;
    }
    if let Err(e) = redis {
        tracing::warn!(error = ?e, "redis not ready");
        ready = false;
    }
    if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
