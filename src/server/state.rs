//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::server::service::token::TokenCodec;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenCodec>` shares the signing keys
/// - `CancellationToken` clones observe the same cancellation
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates access tokens.
    pub tokens: Arc<TokenCodec>,

    /// Cancelled when the server begins shutting down.
    ///
    /// Request handlers derive child tokens from it so invitation retry waits end
    /// promptly during shutdown.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Access token codec built from the configured secret
    /// - `shutdown` - Process-wide shutdown signal
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenCodec, shutdown: CancellationToken) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            shutdown,
        }
    }
}
