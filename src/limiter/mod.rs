//! Sliding-window rate limiting
//!
//! The gate itself is stateless, all window state lives in the backing
//! counter, in-process by default or Redis with the `redis` feature

use async_trait::async_trait;
use thiserror::Error as ThisError;

#[cfg(not(feature = "redis"))]
use memory::Memory;
#[cfg(feature = "redis")]
use self::redis::Redis;

pub(crate) mod memory;
#[cfg(feature = "redis")]
mod redis;

/// Requests admitted per window
pub const MAX_REQUESTS: usize = 100;

/// Window length in seconds
pub const WINDOW_SECONDS: u64 = 60;

/// The one identifier shared by all callers
///
/// The limit is enforced application-wide, not per client
pub const SHARED_IDENTIFIER: &str = "notes-api";

/// Setup the rate limiter
#[cfg(not(feature = "redis"))]
#[allow(clippy::unused_async)]
pub async fn setup() -> Result<Memory> {
    Ok(Memory::new())
}

/// Setup the rate limiter
///
/// Fails when no connection can be made with the counter service
#[cfg(feature = "redis")]
pub async fn setup() -> Result<Redis> {
    Redis::new().await
}

/// Rate limiter errors
///
/// Distinct from a denial, the caller decides whether to fail the request
#[derive(Debug, ThisError)]
pub enum Error {
    /// The counter service could not be reached or misbehaved
    #[error("Counter service error: {0}")]
    Service(String),
}

/// Result type for all rate limiter interactions
pub type Result<T> = core::result::Result<T, Error>;

/// The verdict for a single request
#[derive(Clone, Copy, Debug)]
pub struct Decision {
    /// Whether the request fits in the current window
    pub admitted: bool,
}

/// A sliding-window rate limiter
#[async_trait]
pub trait RateLimiter: Clone + Send + Sync + 'static {
    /// Count the request against the window of `identifier`
    ///
    /// Admitted requests occupy a slot, denied ones do not
    async fn check(&self, identifier: &str) -> Result<Decision>;
}
