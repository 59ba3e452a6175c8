//! Storage error types
//!
//! Error codes:
//! - COMPANY_STORAGE_IO_ERROR: the data directory or file could not be prepared
//! - COMPANY_STORAGE_WRITE_FAILED: the collection could not be written
//! - COMPANY_STORAGE_READ_FAILED: the data file could not be read
//! - COMPANY_STORAGE_CORRUPTED: the data file is not a JSON array of companies

use std::fmt;
use std::io;

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Disk I/O failure outside a read or write of the collection
    IoError,
    /// Collection write failed
    WriteFailed,
    /// Collection read failed
    ReadFailed,
    /// Data file contents did not parse
    Corrupted,
}

impl StorageErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::IoError => "COMPANY_STORAGE_IO_ERROR",
            StorageErrorCode::WriteFailed => "COMPANY_STORAGE_WRITE_FAILED",
            StorageErrorCode::ReadFailed => "COMPANY_STORAGE_READ_FAILED",
            StorageErrorCode::Corrupted => "COMPANY_STORAGE_CORRUPTED",
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error with code, message and optional I/O cause
#[derive(Debug)]
pub struct StorageError {
    code: StorageErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StorageError {
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::IoError,
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::WriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Write failure with no underlying I/O error (e.g. serialization)
    pub fn write_failed_no_source(message: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::WriteFailed,
            message: message.into(),
            source: None,
        }
    }

    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::ReadFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::Corrupted,
            message: message.into(),
            source: None,
        }
    }

    pub fn code(&self) -> StorageErrorCode {
        self.code
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
