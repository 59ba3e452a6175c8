//! # HTTP Server
//!
//! Combines the company and health routers behind CORS and request tracing.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::observability::{Event, SharedEventLog};

use super::company_routes::{company_routes, CompanyState};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// HTTP server for the company API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
    log: SharedEventLog,
}

impl HttpServer {
    /// Create a server around an already wired company state
    pub fn new(config: HttpServerConfig, state: Arc<CompanyState>) -> Self {
        let log = state.log.clone();
        let router = Self::build_router(&config, state);
        Self {
            config,
            router,
            log,
        }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, state: Arc<CompanyState>) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(company_routes(state))
            .layer(Self::cors_layer(config))
            .layer(TraceLayer::new_for_http())
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let origin = if config.allows_any_origin() {
            AllowOrigin::from(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        let local = listener.local_addr()?.to_string();
        self.log.info(Event::Serving, &[("addr", local.as_str())]);

        axum::serve(listener, self.router).await
    }
}
