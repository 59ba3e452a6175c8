//! # Company Domain
//!
//! The sole persisted entity and its name rule.

pub mod record;

pub use record::{timestamp_now, Company, CompanyName, NameError};
