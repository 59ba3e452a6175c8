//! # Service Layer
//!
//! Create, read, update and delete over the record store, assigning ids and
//! timestamps.

pub mod company_service;
pub mod errors;

pub use company_service::CompanyService;
pub use errors::{ServiceError, ServiceResult};
