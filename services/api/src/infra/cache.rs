use std::time::Duration;

use anyhow::Context as _;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Pool, Runtime};

use crate::domain::repository::AccessCodeStore;
use crate::domain::types::ACCESS_CODE_MARKER;
use crate::error::ApiError;
use crate::infra::within;

/// Build the Redis pool. Connections are opened lazily, see [`ping`].
pub fn create_pool(redis_url: &str) -> anyhow::Result<Pool> {
    deadpool_redis::Config::from_url(redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("create Redis pool")
}

/// Round-trip a `PING` to Redis.
pub async fn ping(pool: &Pool, timeout: Duration) -> Result<(), ApiError> {
    within(timeout, "redis ping", async {
        let mut conn = pool.get().await.context("get Redis connection")?;
        let _: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("PING")?;
        Ok::<_, ApiError>(())
    })
    .await
}

#[derive(Clone)]
pub struct RedisAccessCodeStore {
    pub pool: Pool,
    pub timeout: Duration,
}

/// `accessCode:<username>:<code>`. `%` and `:` in the username are percent-escaped so
/// that no two (username, code) pairs share a key.
fn access_code_key(username: &str, code: &str) -> String {
    let username = username.replace('%', "%25").replace(':', "%3A");
    format!("accessCode:{username}:{code}")
}

impl AccessCodeStore for RedisAccessCodeStore {
    async fn put(&self, username: &str, code: &str, ttl_secs: u64) -> Result<(), ApiError> {
        let key = access_code_key(username, code);
        within(self.timeout, "store access code", async {
            let mut conn = self.pool.get().await.context("get Redis connection")?;
            let (): () = conn
                .set_ex(&key, ACCESS_CODE_MARKER, ttl_secs)
                .await
                .context("SETEX access code")?;
            Ok::<_, ApiError>(())
        })
        .await
    }

    async fn take(&self, username: &str, code: &str) -> Result<bool, ApiError> {
        let key = access_code_key(username, code);
        within(self.timeout, "consume access code", async {
            let mut conn = self.pool.get().await.context("get Redis connection")?;
            // GETDEL reads and removes in one command, so two verifiers racing on the
            // same key cannot both see the marker.
            let value: Option<String> = conn.get_del(&key).await.context("GETDEL access code")?;
            Ok::<_, ApiError>(value.as_deref() == Some(ACCESS_CODE_MARKER))
        })
        .await
    }
}
