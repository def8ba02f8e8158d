#![allow(async_fn_in_trait)]

use crate::domain::types::{Post, PostDraft, UserCredentials};
use crate::error::ApiError;

/// Read-only access to user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, ApiError>;

    async fn exists(&self, username: &str) -> Result<bool, ApiError>;
}

/// Repository for posts.
pub trait PostRepository: Send + Sync {
    /// All posts, most recently created first.
    async fn list_newest_first(&self) -> Result<Vec<Post>, ApiError>;

    /// Insert a post. Fails with `SlugConflict` when the slug is taken.
    async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError>;

    /// Overwrite a post. Returns `None` if no post has `id`.
    async fn update(&self, id: i32, draft: &PostDraft) -> Result<Option<Post>, ApiError>;

    /// Delete a post. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Short-lived access-code records, keyed by (username, code).
pub trait AccessCodeStore: Send + Sync {
    /// Write the record for (username, code), replacing any existing one and
    /// restarting its expiry.
    async fn put(&self, username: &str, code: &str, ttl_secs: u64) -> Result<(), ApiError>;

    /// Remove the record in one atomic step. Returns `true` only to the caller that
    /// removed a live record; concurrent callers for the same key get `false`.
    async fn take(&self, username: &str, code: &str) -> Result<bool, ApiError>;
}
