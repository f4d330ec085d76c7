//! Redis-backed sliding window
//!
//! One sorted set per identifier, scored by admit time in milliseconds,
//! trimmed as the window moves

use std::sync::Arc;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use async_trait::async_trait;
use uuid::Uuid;

use ::redis::aio::ConnectionManager;
use ::redis::Client;
use ::redis::Script;

use super::Decision;
use super::Error;
use super::RateLimiter;
use super::Result;
use super::MAX_REQUESTS;
use super::WINDOW_SECONDS;

/// Trim the window, count what is left and admit in one atomic step
///
/// Concurrent checks at the capacity boundary serialize inside Redis, the
/// count can never run past the capacity. Returns 1 when admitted.
const CHECK_SCRIPT: &str = r"
local key = KEYS[1]
redis.call('ZREMRANGEBYSCORE', key, 0, ARGV[1])
if redis.call('ZCARD', key) >= tonumber(ARGV[2]) then
    return 0
end
redis.call('ZADD', key, ARGV[3], ARGV[4])
redis.call('EXPIRE', key, ARGV[5])
return 1
";

/// A Redis-backed sliding-window counter
#[derive(Clone)]
pub struct Redis {
    /// Multiplexed connection, reconnects on its own
    connection: ConnectionManager,

    /// The check, loaded once and invoked by hash
    script: Arc<Script>,
}

impl Redis {
    /// Create a new Redis counter
    ///
    /// Uses the `REDIS_URL` environment variable
    pub async fn new() -> Result<Self> {
        let redis_connection_string = std::env::var("REDIS_URL")
            .map_err(|_| Error::Service("REDIS_URL is not set".to_string()))?;

        let client = Client::open(redis_connection_string).map_err(service_error)?;

        let connection = ConnectionManager::new(client).await.map_err(service_error)?;

        Ok(Self {
            connection,
            script: Arc::new(Script::new(CHECK_SCRIPT)),
        })
    }
}

#[async_trait]
impl RateLimiter for Redis {
    async fn check(&self, identifier: &str) -> Result<Decision> {
        let key = format!("noteboard:rate:{identifier}");

        let now_ms = unix_millis()?;
        let window_start_ms = now_ms.saturating_sub(WINDOW_SECONDS * 1000);

        // the member only needs to be unique
        let member = format!("{now_ms}-{}", Uuid::new_v4());

        let mut connection = self.connection.clone();

        let admitted: i64 = self
            .script
            .key(&key)
            .arg(window_start_ms)
            .arg(MAX_REQUESTS)
            .arg(now_ms)
            .arg(member)
            .arg(WINDOW_SECONDS)
            .invoke_async(&mut connection)
            .await
            .map_err(service_error)?;

        Ok(Decision {
            admitted: admitted == 1,
        })
    }
}

/// Milliseconds since the Unix epoch
fn unix_millis() -> Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(service_error)?;

    Ok(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

/// Convert a Redis failure to a counter service error
fn service_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Service(err.to_string())
}
