use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error variants. The `Display` text is what the caller sees.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("User not found")]
    UserNotFound,
    #[error("Post not found")]
    PostNotFound,
    /// Covers never issued, expired and already used codes alike.
    #[error("Invalid or expired access code")]
    InvalidAccessCode,
    /// Wrong password, wrong device, or both.
    #[error("Invalid password or device ID")]
    InvalidCredential,
    #[error("Slug already exists, choose a different title")]
    SlugConflict,
    #[error("Internal server error")]
    StoreUnavailable(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PostNotFound => "POST_NOT_FOUND",
            Self::InvalidAccessCode => "INVALID_ACCESS_CODE",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::SlugConflict => "SLUG_CONFLICT",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::SlugConflict => StatusCode::BAD_REQUEST,
            Self::UserNotFound | Self::PostNotFound => StatusCode::NOT_FOUND,
            Self::InvalidAccessCode | Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "request body rejected");
        Self::Validation("Request body must be a JSON object with string fields")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // TraceLayer already records every response status. Only store failures are
        // logged here, with the full anyhow chain, since the body hides it.
        if let Self::StoreUnavailable(ref e) = self {
            tracing::error!(error = ?e, kind = "STORE_UNAVAILABLE", "store unavailable");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}
