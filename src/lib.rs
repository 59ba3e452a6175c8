//! company-api - company records over HTTP, persisted in a single JSON file
//!
//! Layers, outermost first:
//! - `http_server`: Axum routes and status mapping
//! - `service`: CRUD semantics, identifiers and timestamps
//! - `storage`: whole-file read/write of the record collection
//!
//! `observability` provides the event log injected into every layer, and
//! `cli` boots the whole thing.

pub mod cli;
pub mod company;
pub mod http_server;
pub mod observability;
pub mod service;
pub mod storage;
