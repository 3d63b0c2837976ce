//! Core module containing the fundamental types for process attachment
//! and cross-process memory access.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, MemoryError, MemoryResult, ModuleInfo, ProcessId, ProcessInfo};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
