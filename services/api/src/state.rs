use std::time::Duration;

use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use crate::infra::cache::RedisAccessCodeStore;
use crate::infra::db::{DbPostRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
///
/// Holds the two store handles opened at startup; clones share the same pools.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    /// Upper bound for each individual store call.
    pub store_timeout: Duration,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
            timeout: self.store_timeout,
        }
    }

    pub fn post_repo(&self) -> DbPostRepository {
        DbPostRepository {
            db: self.db.clone(),
            timeout: self.store_timeout,
        }
    }

    pub fn access_code_store(&self) -> RedisAccessCodeStore {
        RedisAccessCodeStore {
            pool: self.redis.clone(),
            timeout: self.store_timeout,
        }
    }
}
