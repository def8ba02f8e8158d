pub mod access_code;
pub mod credential;
pub mod health;
pub mod post;
pub mod user;

use axum::extract::FromRequest;
use serde::Serialize;

use crate::error::ApiError;

/// JSON request body whose rejections (missing content type, malformed JSON, wrong
/// field types) surface as `ApiError::Validation`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// `{"success": true}` acknowledgement, optionally with a message.
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: &'static str) -> Self {
        Self {
            success: true,
            message: Some(message),
        }
    }
}
