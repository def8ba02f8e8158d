use std::time::Duration;

use crate::error::ApiError;

pub mod cache;
pub mod db;

/// Run a store call with an upper bound on its duration. An elapsed limit is reported
/// as `StoreUnavailable`, the same as a failed connection.
pub async fn within<T, F>(limit: Duration, op: &'static str, fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    tokio::time::timeout(limit, fut).await.unwrap_or_else(|_| {
        Err(ApiError::StoreUnavailable(anyhow::anyhow!(
            "{op} timed out after {}ms",
            limit.as_millis()
        )))
    })
}
