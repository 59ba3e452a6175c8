//! # Service Errors
//!
//! Only system faults are errors here. Not-found and invalid names are typed
//! outcomes (`Option`, `bool`, `CompanyName`), never `ServiceError`.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The record store failed
    #[error("store failure: {0}")]
    Store(#[from] StorageError),
}
