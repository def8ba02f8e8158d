use axum::{Json, extract::State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::JsonBody;
use crate::handlers::SuccessResponse;
use crate::state::AppState;
use crate::usecase::access_code::{
    AccessCodeInput, IssueAccessCodeUseCase, VerifyAccessCodeUseCase,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCodeRequest {
    pub access_code: Option<String>,
    pub username: Option<String>,
}

impl From<AccessCodeRequest> for AccessCodeInput {
    fn from(body: AccessCodeRequest) -> Self {
        Self {
            username: body.username,
            access_code: body.access_code,
        }
    }
}

// ── POST /store-access-code ──────────────────────────────────────────────────

pub async fn store_access_code(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AccessCodeRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let usecase = IssueAccessCodeUseCase {
        store: state.access_code_store(),
    };
    usecase.execute(body.into()).await?;
    Ok(Json(SuccessResponse::ok()))
}

// ── POST /verify-access-code ─────────────────────────────────────────────────

pub async fn verify_access_code(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AccessCodeRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let usecase = VerifyAccessCodeUseCase {
        store: state.access_code_store(),
    };
    usecase.execute(body.into()).await?;
    Ok(Json(SuccessResponse::ok()))
}
