use crate::domain::repository::UserRepository;
use crate::domain::types::present;
use crate::error::ApiError;

pub struct VerifyPasswordInput {
    pub username: Option<String>,
    pub password: Option<String>,
    pub device_id: Option<String>,
}

pub struct VerifyPasswordUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> VerifyPasswordUseCase<U> {
    /// Device-bound password check. A mismatch on the password, the device, or both
    /// yields the same `InvalidCredential`.
    pub async fn execute(&self, input: VerifyPasswordInput) -> Result<(), ApiError> {
        let username =
            present(input.username).ok_or(ApiError::Validation("Username is required"))?;

        let user = self
            .users
            .find_credentials(&username)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        if !user.matches(input.password.as_deref(), input.device_id.as_deref()) {
            return Err(ApiError::InvalidCredential);
        }
        Ok(())
    }
}
