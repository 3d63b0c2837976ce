//! Custom error types for process attachment and memory access

use std::fmt;
use thiserror::Error;

/// Main error type for attachment and memory operations.
///
/// Two outcomes that might look like errors are deliberately not part of this
/// taxonomy: "process not found" is reported as a non-connected
/// [`ProcessHandle`](crate::process::ProcessHandle), and "module not found"
/// is reported as a null base address, because both are legitimate query
/// results a caller branches on rather than failures.
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Process enumeration unavailable: {0}")]
    EnumerationUnavailable(String),

    #[error("Module enumeration failed for process {pid}: {reason}")]
    ModuleEnumerationFailed { pid: u32, reason: String },

    #[error("No process is connected")]
    NotConnected,

    #[error("Failed to read {expected} bytes at {address}: {reason}")]
    ReadFailed {
        address: String,
        expected: usize,
        reason: String,
    },

    #[error("Failed to write {expected} bytes at {address}: {reason}")]
    WriteFailed {
        address: String,
        expected: usize,
        reason: String,
    },

    #[error("Windows API error: {0}")]
    WindowsApi(String),
}

/// Result type alias for attachment and memory operations
pub type MemoryResult<T> = Result<T, MemoryError>;

impl MemoryError {
    /// Creates a module enumeration error for a process
    pub fn module_enumeration_failed(pid: u32, reason: impl Into<String>) -> Self {
        MemoryError::ModuleEnumerationFailed {
            pid,
            reason: reason.into(),
        }
    }

    /// Creates a read failed error
    pub fn read_failed(
        address: impl fmt::Display,
        expected: usize,
        reason: impl Into<String>,
    ) -> Self {
        MemoryError::ReadFailed {
            address: address.to_string(),
            expected,
            reason: reason.into(),
        }
    }

    /// Creates a write failed error
    pub fn write_failed(
        address: impl fmt::Display,
        expected: usize,
        reason: impl Into<String>,
    ) -> Self {
        MemoryError::WriteFailed {
            address: address.to_string(),
            expected,
            reason: reason.into(),
        }
    }

    /// Creates a read error for an OS read that transferred fewer bytes than requested
    pub fn short_read(address: impl fmt::Display, expected: usize, actual: usize) -> Self {
        Self::read_failed(
            address,
            expected,
            format!("short read, {actual} of {expected} bytes transferred"),
        )
    }

    /// Creates a write error for an OS write that transferred fewer bytes than requested
    pub fn short_write(address: impl fmt::Display, expected: usize, actual: usize) -> Self {
        Self::write_failed(
            address,
            expected,
            format!("short write, {actual} of {expected} bytes transferred"),
        )
    }
}
