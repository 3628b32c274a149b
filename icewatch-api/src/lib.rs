//! # Icewatch API Server
//!
//! REST API reporting Arctic and Antarctic sea-ice extent.
//!
//! ## Endpoints
//!
//! - `GET /` - Dashboard page
//! - `GET /api/status` - Cached status for both hemispheres (6 h TTL)
//! - `GET /api/current` - Current extent for both hemispheres, uncached
//! - `GET /api/monthly/:hemisphere?year=&month=` - Monthly series
//! - `GET /api/historical/:hemisphere?years=` - Monthly series for several years
//! - `GET /api/health` - Health check
//! - `GET /api/refresh` - Force a status cache refresh
//!
//! ## Example
//!
//! ```rust,ignore
//! use icewatch_api::{ApiServer, ApiConfig};
//!
//! let config = ApiConfig::from_env()?;
//! let server = ApiServer::new(config)?;
//! server.run(([0, 0, 0, 0], 5000)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use icewatch_core::error::Result;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// API server for Icewatch.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self::with_state(AppState::new(config)?))
    }

    /// Creates a server around a prepared state.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Creates the router with all routes and middleware configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!(
            debug = self.state.config.debug,
            upstream = %self.state.config.nsidc.base_url,
            "Icewatch API server listening on {}",
            addr
        );

        axum::serve(listener, self.router()).await
    }
}
