#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use std::net::SocketAddr;

use anyhow::Result;
use axum::Extension;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::limiter::RateLimiter;
use crate::storage::Storage;
use crate::utils::env_var_or;

mod api;
mod limiter;
mod notes;
mod storage;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "noteboard=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    // refuse to accept traffic when the store is unreachable
    let app = setup_app().await?;

    let address = setup_address()?;
    tracing::info!("Listening on {}", address);

    let listener = TcpListener::bind(address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");

    Ok(())
}

/// Resolves on the first shutdown signal, letting in-flight requests finish
async fn shutdown_signal() {
    #[cfg(unix)]
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        .expect("Valid SIGTERM handler");

    #[cfg(unix)]
    let sigterm = sigterm.recv();

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<Option<()>>();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => tracing::info!("Interrupted, draining requests"),
        _ = sigterm => tracing::info!("Terminated, draining requests"),
    }
}

/// Create and setup the app with its dependencies
///
/// # Errors
///
/// Will return `Err` if any of its dependencies fail to load:
/// - Store connection
/// - Rate limit counter connection
pub async fn setup_app() -> Result<Router> {
    let storage = storage::setup().await?;
    let limiter = limiter::setup().await?;

    Ok(create_router(storage, limiter))
}

/// Create the router for Noteboard
fn create_router<S: Storage, L: RateLimiter>(storage: S, limiter: L) -> Router {
    Router::new()
        .nest("/api/notes", api::router::<S, L>())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(storage))
        .layer(Extension(limiter))
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;
    use tracing_subscriber::EnvFilter;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer())
        .init();
}

fn setup_address() -> Result<SocketAddr> {
    let mut address = env_var_or("ADDRESS", DEFAULT_ADDRESS).parse::<SocketAddr>()?;

    // optional override of just the port
    if let Ok(port) = std::env::var("PORT") {
        // only check non-empty strings
        if !port.is_empty() {
            let port = port.parse::<u16>()?;

            address.set_port(port);
        }
    }

    Ok(address)
}
