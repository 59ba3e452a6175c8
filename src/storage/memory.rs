//! In-memory record store
//!
//! Same whole-collection contract as the file store, without a disk. Writes
//! can be made to fail on demand so callers can exercise their error paths.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::company::Company;

use super::errors::{StorageError, StorageResult};
use super::RecordStore;

/// In-memory record store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Company>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records
    pub fn with_records(records: Vec<Company>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `write_all` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored collection
    pub fn snapshot(&self) -> Vec<Company> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Company>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordStore for MemoryStore {
    fn read_all(&self) -> StorageResult<Vec<Company>> {
        Ok(self.lock().clone())
    }

    fn write_all(&self, records: &[Company]) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::write_failed(
                "memory store writes disabled",
                io::Error::new(io::ErrorKind::Other, "injected failure"),
            ));
        }
        *self.lock() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::CompanyName;
    use crate::storage::StorageErrorCode;

    fn company(name: &str) -> Company {
        Company::new(CompanyName::parse(name).unwrap())
    }

    #[test]
    fn test_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_replaces_collection() {
        let store = MemoryStore::with_records(vec![company("Acme")]);
        let replacement = vec![company("Globex"), company("Initech")];

        store.write_all(&replacement).unwrap();

        assert_eq!(store.read_all().unwrap(), replacement);
    }

    #[test]
    fn test_injected_write_failure_keeps_previous_state() {
        let original = vec![company("Acme")];
        let store = MemoryStore::with_records(original.clone());
        store.set_fail_writes(true);

        let err = store.write_all(&[]).unwrap_err();

        assert_eq!(err.code(), StorageErrorCode::WriteFailed);
        assert_eq!(store.snapshot(), original);

        store.set_fail_writes(false);
        store.write_all(&[]).unwrap();
        assert!(store.snapshot().is_empty());
    }
}
