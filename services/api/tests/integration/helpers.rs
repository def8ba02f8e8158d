use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use nikufam_api::domain::repository::{AccessCodeStore, UserRepository};
use nikufam_api::domain::types::UserCredentials;
use nikufam_api::error::ApiError;
use nikufam_api::usecase::access_code::AccessCodeInput;

// ── MockAccessCodeStore ──────────────────────────────────────────────────────

/// In-memory access-code store. Expiry follows the tokio clock so tests can pause
/// and advance time.
#[derive(Clone, Default)]
pub struct MockAccessCodeStore {
    pub records: Arc<Mutex<HashMap<(String, String), Instant>>>,
}

impl MockAccessCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unexpired records.
    pub fn live_count(&self) -> usize {
        let now = Instant::now();
        self.records
            .lock()
            .unwrap()
            .values()
            .filter(|expires_at| **expires_at > now)
            .count()
    }
}

impl AccessCodeStore for MockAccessCodeStore {
    async fn put(&self, username: &str, code: &str, ttl_secs: u64) -> Result<(), ApiError> {
        self.records.lock().unwrap().insert(
            (username.to_owned(), code.to_owned()),
            Instant::now() + Duration::from_secs(ttl_secs),
        );
        Ok(())
    }

    async fn take(&self, username: &str, code: &str) -> Result<bool, ApiError> {
        let removed = self
            .records
            .lock()
            .unwrap()
            .remove(&(username.to_owned(), code.to_owned()));
        Ok(matches!(removed, Some(expires_at) if expires_at > Instant::now()))
    }
}

// ── FailingAccessCodeStore ───────────────────────────────────────────────────

/// Every call fails as if the store were unreachable.
pub struct FailingAccessCodeStore;

impl AccessCodeStore for FailingAccessCodeStore {
    async fn put(&self, _username: &str, _code: &str, _ttl_secs: u64) -> Result<(), ApiError> {
        Err(anyhow::anyhow!("connection refused").into())
    }

    async fn take(&self, _username: &str, _code: &str) -> Result<bool, ApiError> {
        Err(anyhow::anyhow!("connection refused").into())
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Vec<UserCredentials>,
}

impl MockUserRepo {
    pub fn new(users: Vec<UserCredentials>) -> Self {
        Self { users }
    }

    pub fn empty() -> Self {
        Self { users: vec![] }
    }
}

impl UserRepository for MockUserRepo {
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, ApiError> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn exists(&self, username: &str) -> Result<bool, ApiError> {
        Ok(self.users.iter().any(|u| u.username == username))
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user() -> UserCredentials {
    UserCredentials {
        username: "alice".to_owned(),
        password: "pw1".to_owned(),
        device_id: Some("dev1".to_owned()),
    }
}

pub fn code_input(username: &str, code: &str) -> AccessCodeInput {
    AccessCodeInput {
        username: Some(username.to_owned()),
        access_code: Some(code.to_owned()),
    }
}
