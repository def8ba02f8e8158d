use crate::domain::repository::UserRepository;
use crate::domain::types::present;
use crate::error::ApiError;

pub struct CheckUsernameUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> CheckUsernameUseCase<U> {
    /// Whether an account with this username exists.
    pub async fn execute(&self, username: Option<String>) -> Result<bool, ApiError> {
        let username = present(username).ok_or(ApiError::Validation("Username is required"))?;
        self.users.exists(&username).await
    }
}
