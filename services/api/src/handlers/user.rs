use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::handlers::JsonBody;
use crate::state::AppState;
use crate::usecase::user::CheckUsernameUseCase;

#[derive(Deserialize)]
pub struct CheckUsernameRequest {
    pub username: Option<String>,
}

#[derive(Serialize)]
pub struct CheckUsernameResponse {
    pub exists: bool,
}

// ── POST /api/check-username ─────────────────────────────────────────────────

/// 200 `{exists: true}` or 404 `{exists: false}`.
pub async fn check_username(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CheckUsernameRequest>,
) -> Result<(StatusCode, Json<CheckUsernameResponse>), ApiError> {
    let usecase = CheckUsernameUseCase {
        users: state.user_repo(),
    };
    let exists = usecase.execute(body.username).await?;
    let status = if exists {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(CheckUsernameResponse { exists })))
}
