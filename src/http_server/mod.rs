//! # company-api HTTP Server Module
//!
//! Axum server exposing the company service.
//!
//! # Endpoints
//!
//! - `GET /` - Plain-text greeting
//! - `/companies`, `/companies/:id` - Company CRUD
//! - `GET /health` - Health check

pub mod company_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use company_routes::CompanyState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
