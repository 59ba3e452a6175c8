//! # JSON File Store
//!
//! The collection is a pretty-printed JSON array in a single file.
//!
//! Reads bootstrap a missing file to `[]` and degrade to an empty collection
//! when the file cannot be read or parsed. Bootstrap only ever creates a new
//! file; it never replaces one a writer put in place. Writes go to a temp
//! file in the same directory, are fsynced, then renamed over the data file,
//! so a failed write leaves the previous contents in place.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::company::Company;
use crate::observability::{Event, SharedEventLog};

use super::errors::{StorageError, StorageResult};
use super::RecordStore;

/// File-backed record store
pub struct JsonFileStore {
    path: PathBuf,
    log: SharedEventLog,
}

impl JsonFileStore {
    /// Create a store over `path`. Nothing touches the disk until first use.
    pub fn new(path: impl Into<PathBuf>, log: SharedEventLog) -> Self {
        Self {
            path: path.into(),
            log,
        }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file as `[]` if it does not exist.
    ///
    /// Returns true if the file was created. Creation is exclusive, so a
    /// file written concurrently by `write_all` is left untouched.
    pub fn initialize(&self) -> StorageResult<bool> {
        self.ensure_parent_dir()?;

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => {
                return Err(StorageError::io_error(
                    format!("failed to create data file {}", self.path.display()),
                    e,
                ))
            }
        };

        file.write_all(b"[]")
            .and_then(|()| file.sync_all())
            .map_err(|e| {
                StorageError::io_error(
                    format!("failed to initialize data file {}", self.path.display()),
                    e,
                )
            })?;

        self.log.info(
            Event::StoreInitialized,
            &[("path", self.path.display().to_string().as_str())],
        );
        Ok(true)
    }

    fn load(&self) -> StorageResult<Vec<Company>> {
        if self.initialize()? {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::read_failed(
                format!("failed to read data file {}", self.path.display()),
                e,
            )
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            StorageError::corrupted(format!(
                "data file {} is not a JSON array of companies: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn ensure_parent_dir(&self) -> StorageResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::io_error(
                        format!("failed to create data directory {}", parent.display()),
                        e,
                    )
                })
            }
            _ => Ok(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data.json".to_string());
        self.path
            .with_file_name(format!("{}.{}.tmp", file_name, Uuid::new_v4().simple()))
    }

    fn replace_file(&self, payload: &[u8]) -> StorageResult<()> {
        self.ensure_parent_dir()?;

        let temp_path = self.temp_path();
        let result = write_synced(&temp_path, payload).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(|e| {
                StorageError::write_failed(
                    format!("failed to replace data file {}", self.path.display()),
                    e,
                )
            })
        });

        if result.is_err() {
            // Best effort; the temp file is garbage either way.
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

fn write_synced(path: &Path, payload: &[u8]) -> StorageResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            StorageError::write_failed(
                format!("failed to create temp file {}", path.display()),
                e,
            )
        })?;

    file.write_all(payload).map_err(|e| {
        StorageError::write_failed(format!("failed to write temp file {}", path.display()), e)
    })?;

    file.sync_all().map_err(|e| {
        StorageError::write_failed(format!("failed to fsync temp file {}", path.display()), e)
    })
}

impl RecordStore for JsonFileStore {
    fn read_all(&self) -> StorageResult<Vec<Company>> {
        match self.load() {
            Ok(records) => Ok(records),
            Err(e) => {
                self.log.error(
                    Event::StoreReadFailed,
                    &[
                        ("path", self.path.display().to_string().as_str()),
                        ("error", e.to_string().as_str()),
                    ],
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_all(&self, records: &[Company]) -> StorageResult<()> {
        let result = serde_json::to_vec_pretty(records)
            .map_err(|e| {
                StorageError::write_failed_no_source(format!("failed to encode companies: {}", e))
            })
            .and_then(|payload| self.replace_file(&payload));

        match &result {
            Ok(()) => self.log.info(
                Event::StoreWritten,
                &[("total", records.len().to_string().as_str())],
            ),
            Err(e) => self.log.error(
                Event::StoreWriteFailed,
                &[
                    ("path", self.path.display().to_string().as_str()),
                    ("error", e.to_string().as_str()),
                ],
            ),
        }
        result
    }
}
