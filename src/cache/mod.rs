use redis::{aio::ConnectionManager, Client, RedisError};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// JSON values in Redis, used for the public listing responses.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

fn json_error(what: &'static str, e: serde_json::Error) -> RedisError {
    RedisError::from((redis::ErrorKind::TypeError, what, e.to_string()))
}

impl RedisCache {
    pub async fn new(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }

    /// Read and decode a cached value; `None` on a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> redis::RedisResult<Option<T>> {
        let raw: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;

        raw.map(|v| serde_json::from_str(&v).map_err(|e| json_error("Deserialization error", e)))
            .transpose()
    }

    /// Store a value, expiring after `ttl_seconds` when given.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: Option<u64>,
    ) -> redis::RedisResult<()> {
        let encoded =
            serde_json::to_string(value).map_err(|e| json_error("Serialization error", e))?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(encoded);
        if let Some(ttl) = ttl_seconds {
            cmd.arg("EX").arg(ttl);
        }

        cmd.query_async(&mut self.connection.clone()).await
    }

    /// Delete every key matching a glob pattern.
    pub async fn delete_pattern(&self, pattern: &str) -> redis::RedisResult<()> {
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut self.connection.clone())
            .await?;

        if keys.is_empty() {
            return Ok(());
        }
        redis::cmd("DEL")
            .arg(&keys)
            .query_async(&mut self.connection.clone())
            .await
    }
}

/// Cache key generators
pub mod keys {
    /// Pattern matching every cached review listing
    pub const REVIEWS_ALL: &str = "reviews:list:*";

    /// Pattern matching every cached gallery listing
    pub const PROJECTS_ALL: &str = "projects:list:*";

    /// Generate key for a review listing (`filter` is a service or `all`)
    pub fn reviews(filter: &str) -> String {
        format!("reviews:list:{}", filter)
    }

    /// Generate key for a gallery listing (`filter` is a category or `all`)
    pub fn projects(filter: &str) -> String {
        format!("projects:list:{}", filter)
    }
}

/// Cache configuration
pub struct CacheConfig {
    pub reviews_ttl: Duration,
    pub projects_ttl: Duration,
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            reviews_ttl: parse_duration_secs("CACHE_TTL_REVIEWS", 300),
            projects_ttl: parse_duration_secs("CACHE_TTL_PROJECTS", 300),
        }
    }
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}

/// Drop every key matching `pattern`, logging instead of failing.
///
/// Called after every write that changes a public listing.
pub async fn invalidate(cache: &RedisCache, pattern: &str) {
    if let Err(e) = cache.delete_pattern(pattern).await {
        tracing::warn!("Cache invalidation failed for {pattern}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_invalid_ttl_uses_default() {
        assert_eq!(
            parse_duration_secs("JEN_TEST_TTL_UNSET", 300),
            Duration::from_secs(300)
        );
    }

    #[test]
    fn listing_keys_fall_under_invalidation_patterns() {
        let prefix = keys::REVIEWS_ALL.trim_end_matches('*');
        assert!(keys::reviews("kitchen").starts_with(prefix));
        let prefix = keys::PROJECTS_ALL.trim_end_matches('*');
        assert!(keys::projects("all").starts_with(prefix));
    }
}
