use axum::{Json, extract::State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::JsonBody;
use crate::handlers::SuccessResponse;
use crate::state::AppState;
use crate::usecase::credential::{VerifyPasswordInput, VerifyPasswordUseCase};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPasswordRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub device_id: Option<String>,
}

// ── POST /api/verify-password ────────────────────────────────────────────────

pub async fn verify_password(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<VerifyPasswordRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let usecase = VerifyPasswordUseCase {
        users: state.user_repo(),
    };
    usecase
        .execute(VerifyPasswordInput {
            username: body.username,
            password: body.password,
            device_id: body.device_id,
        })
        .await?;
    Ok(Json(SuccessResponse::with_message(
        "Password verified successfully",
    )))
}
