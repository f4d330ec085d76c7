//! The rate limit gate
//!
//! Sits in front of every note route; a denied request never reaches a
//! handler, and never touches the store

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Extension;

use crate::limiter::RateLimiter;
use crate::limiter::SHARED_IDENTIFIER;

use super::Error;

/// Admit or deny a request against the shared window
///
/// CORS preflight requests bypass the gate entirely
pub async fn gate<L: RateLimiter>(
    Extension(limiter): Extension<L>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    match limiter.check(SHARED_IDENTIFIER).await {
        Ok(decision) if decision.admitted => next.run(request).await,
        Ok(_) => {
            Error::too_many_requests("Too many requests, please try again later").into_response()
        }
        Err(err) => {
            // an unreachable counter fails the request, it never silently admits
            tracing::error!(error = %err, "rate limit check failed");

            Error::internal_server_error().into_response()
        }
    }
}
