//! In-process sliding window
//!
//! Keeps one timestamp log per identifier, pruned as the window moves

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Decision;
use super::RateLimiter;
use super::Result;
use super::MAX_REQUESTS;
use super::WINDOW_SECONDS;

/// An in-process sliding-window counter
#[derive(Clone, Debug)]
pub struct Memory {
    /// Admitted requests per window
    max_requests: usize,

    /// Length of the rolling window
    window: Duration,

    /// Timestamps of admitted requests, oldest first, per identifier
    hits: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
}

impl Memory {
    /// Create a counter with the default policy (100 requests per 60 seconds)
    pub fn new() -> Self {
        Self::with_policy(MAX_REQUESTS, Duration::from_secs(WINDOW_SECONDS))
    }

    /// Create a counter with a custom policy
    pub fn with_policy(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Count a request as of `now`
    ///
    /// Split out from `check` so tests can roll the window without waiting
    pub(crate) async fn check_at(&self, identifier: &str, now: Instant) -> Result<Decision> {
        let mut hits = self.hits.lock().await;
        let log = hits.entry(identifier.to_string()).or_default();

        // drop everything that slid out of the window
        while let Some(oldest) = log.front() {
            if now.duration_since(*oldest) >= self.window {
                log.pop_front();
            } else {
                break;
            }
        }

        if log.len() >= self.max_requests {
            return Ok(Decision { admitted: false });
        }

        log.push_back(now);

        Ok(Decision { admitted: true })
    }
}

#[async_trait]
impl RateLimiter for Memory {
    async fn check(&self, identifier: &str) -> Result<Decision> {
        self.check_at(identifier, Instant::now()).await
    }
}
