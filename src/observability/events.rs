//! Observable events for company-api
//!
//! Events are explicit and typed so that log consumers can match on a stable
//! name instead of free text.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP listener bound, ready for requests
    Serving,

    // Store
    /// Data file was missing and has been created as `[]`
    StoreInitialized,
    /// Data file could not be read or parsed; served as empty
    StoreReadFailed,
    /// Whole collection written
    StoreWritten,
    /// Whole-collection write failed
    StoreWriteFailed,

    // Service
    /// A company was created
    CompanyCreated,
    /// The full collection was listed
    CompaniesListed,
    /// A single company was looked up
    CompanyRetrieved,
    /// Lookup by id found nothing
    CompanyNotFound,
    /// Update target did not exist
    CompanyUpdateNotFound,
    /// Delete target did not exist
    CompanyDeleteNotFound,
    /// A company was renamed
    CompanyUpdated,
    /// A company was removed
    CompanyDeleted,

    // HTTP
    /// A request failed with an internal error
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "COMPANY_API_SERVING",

            Event::StoreInitialized => "STORE_INITIALIZED",
            Event::StoreReadFailed => "STORE_READ_FAILED",
            Event::StoreWritten => "STORE_WRITTEN",
            Event::StoreWriteFailed => "STORE_WRITE_FAILED",

            Event::CompanyCreated => "COMPANY_CREATED",
            Event::CompaniesListed => "COMPANIES_LISTED",
            Event::CompanyRetrieved => "COMPANY_RETRIEVED",
            Event::CompanyNotFound => "COMPANY_NOT_FOUND",
            Event::CompanyUpdateNotFound => "COMPANY_UPDATE_NOT_FOUND",
            Event::CompanyDeleteNotFound => "COMPANY_DELETE_NOT_FOUND",
            Event::CompanyUpdated => "COMPANY_UPDATED",
            Event::CompanyDeleted => "COMPANY_DELETED",

            Event::RequestFailed => "REQUEST_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
