//! OS capability traits consumed by the attachment and memory layers
//!
//! The core never talks to the operating system directly; it goes through
//! these three capabilities. On Windows the [`windows`] submodule implements
//! them with Toolhelp32 snapshots and `ReadProcessMemory` /
//! `WriteProcessMemory`. Tests substitute in-memory fakes.

use crate::core::types::{Address, MemoryResult, ModuleInfo, ProcessId, ProcessInfo};

#[cfg(windows)]
pub mod windows;

#[cfg(windows)]
pub use self::windows::{ToolhelpModuleDirectory, ToolhelpProcessDirectory};

/// Point-in-time view of the running processes, plus the ability to open one.
pub trait ProcessDirectory: Send + Sync {
    /// Enumerates all currently running processes.
    ///
    /// An error means the enumeration facility itself could not be started;
    /// an empty or non-matching list is not an error.
    fn processes(&self) -> MemoryResult<Vec<ProcessInfo>>;

    /// Opens a process for memory access with the broadest rights the OS
    /// will grant. Failing to open a known pid (e.g. insufficient privilege)
    /// is an error here, which the attach layer turns into a
    /// found-but-not-connected state.
    fn open(&self, pid: ProcessId) -> MemoryResult<Box<dyn ProcessMemory>>;
}

/// Point-in-time view of the modules loaded into one process.
pub trait ModuleDirectory: Send + Sync {
    /// Enumerates the modules loaded into the given process.
    ///
    /// Must fail when the target process no longer exists, and return an
    /// empty list when it merely has no modules.
    fn modules(&self, pid: ProcessId) -> MemoryResult<Vec<ModuleInfo>>;
}

/// Byte-level memory access to one opened process.
///
/// Both operations report the number of bytes actually transferred; a short
/// transfer is reported as a success with a smaller count on some platforms,
/// so callers must verify the count rather than trust an `Ok`.
pub trait ProcessMemory: Send + Sync {
    /// Reads `buffer.len()` bytes starting at `address` into `buffer`,
    /// returning the number of bytes the OS actually copied.
    fn read_bytes(&self, address: Address, buffer: &mut [u8]) -> MemoryResult<usize>;

    /// Writes `data` starting at `address`, returning the number of bytes
    /// the OS actually copied.
    fn write_bytes(&self, address: Address, data: &[u8]) -> MemoryResult<usize>;
}
