//! Process attachment and typed cross-process memory access
//!
//! `procmem` locates a running process by executable name, attaches to it,
//! resolves module base addresses (with memoization), and performs typed
//! read/write operations against its virtual address space:
//!
//! ```no_run
//! # #[cfg(windows)] fn demo() -> procmem::MemoryResult<()> {
//! use procmem::{MemoryAccessor, ProcessHandle};
//!
//! let handle = ProcessHandle::attach("target.exe")?;
//! if handle.is_connected() {
//!     let accessor = MemoryAccessor::new(&handle);
//!     let base = accessor.resolve_module_base("core.dll")?;
//!     if !base.is_null() {
//!         let health: u32 = accessor.read(base + 0x1A8)?;
//!         accessor.write(base + 0x1A8, health + 50)?;
//!     }
//! }
//! # Ok(()) }
//! ```
//!
//! The OS facilities (process directory, module directory, memory access)
//! are consumed through the traits in [`os`], so everything above the
//! backend is testable with fakes on any platform.

pub mod core;
pub mod memory;
pub mod os;
pub mod process;

// Re-export the public surface
pub use crate::core::types::{
    Address, MemoryError, MemoryResult, ModuleInfo, ProcessId, ProcessInfo,
};
pub use crate::memory::{MemoryAccessor, Pod};
pub use crate::os::{ModuleDirectory, ProcessDirectory, ProcessMemory};
pub use crate::process::ProcessHandle;
