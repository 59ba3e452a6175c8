//! Record store for company-api
//!
//! The whole collection lives in one place and moves as a unit: every read
//! returns all records, every write replaces all records. There is no
//! incremental update, index or log.
//!
//! - `JsonFileStore`: a pretty-printed JSON array on disk
//! - `MemoryStore`: an in-process collection with write-failure injection

mod errors;
mod json_file;
mod memory;

pub use errors::{StorageError, StorageErrorCode, StorageResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::company::Company;

/// Whole-collection persistence
pub trait RecordStore: Send + Sync {
    /// Return every stored record, in stored order.
    ///
    /// Implementations may degrade to an empty collection instead of failing;
    /// `JsonFileStore` does so for unreadable or unparsable files.
    fn read_all(&self) -> StorageResult<Vec<Company>>;

    /// Replace the stored collection. Failures must be returned, not swallowed.
    fn write_all(&self, records: &[Company]) -> StorageResult<()>;
}
