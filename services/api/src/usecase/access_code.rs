use crate::domain::repository::AccessCodeStore;
use crate::domain::types::{ACCESS_CODE_TTL_SECS, present};
use crate::error::ApiError;

/// Request fields for both issuing and verifying a code. Absent and empty are treated
/// the same.
pub struct AccessCodeInput {
    pub username: Option<String>,
    pub access_code: Option<String>,
}

impl AccessCodeInput {
    fn into_pair(self) -> Result<(String, String), ApiError> {
        match (present(self.username), present(self.access_code)) {
            (Some(username), Some(code)) => Ok((username, code)),
            _ => Err(ApiError::Validation("Access code and username are required")),
        }
    }
}

// ── IssueAccessCode ──────────────────────────────────────────────────────────

pub struct IssueAccessCodeUseCase<S: AccessCodeStore> {
    pub store: S,
}

impl<S: AccessCodeStore> IssueAccessCodeUseCase<S> {
    /// Make (username, code) valid for the next `ACCESS_CODE_TTL_SECS` seconds.
    /// Reissuing a live pair restarts its expiry. Other codes for the same user are
    /// left alone.
    pub async fn execute(&self, input: AccessCodeInput) -> Result<(), ApiError> {
        let (username, code) = input.into_pair()?;
        self.store.put(&username, &code, ACCESS_CODE_TTL_SECS).await?;
        tracing::info!(%username, ttl_secs = ACCESS_CODE_TTL_SECS, "access code issued");
        Ok(())
    }
}

// ── VerifyAccessCode ─────────────────────────────────────────────────────────

pub struct VerifyAccessCodeUseCase<S: AccessCodeStore> {
    pub store: S,
}

impl<S: AccessCodeStore> VerifyAccessCodeUseCase<S> {
    /// Consume (username, code). Succeeds at most once per issuance; unknown, expired
    /// and already used codes all fail with `InvalidAccessCode`.
    pub async fn execute(&self, input: AccessCodeInput) -> Result<(), ApiError> {
        let (username, code) = input.into_pair()?;
        if !self.store.take(&username, &code).await? {
            tracing::debug!(%username, "access code rejected");
            return Err(ApiError::InvalidAccessCode);
        }
        tracing::info!(%username, "access code consumed");
        Ok(())
    }
}
