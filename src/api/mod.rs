//! All API endpoint setup

use axum::middleware::from_fn;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;

pub use response::Error;
pub use response::Success;

mod notes;
mod rate_limit;
mod response;

use crate::limiter::RateLimiter;
use crate::storage::Storage;

/// Get the Axum router for all note routes
///
/// Every route sits behind the rate limit gate
pub fn router<S: Storage, L: RateLimiter>() -> Router {
    Router::new()
        .route("/", get(notes::list::<S>))
        .route("/", post(notes::create::<S>))
        .route("/{id}", get(notes::single::<S>))
        .route("/{id}", put(notes::update::<S>))
        .route("/{id}", delete(notes::delete::<S>))
        .layer(from_fn(rate_limit::gate::<L>))
}
