//! Core type definitions
//!
//! Fundamental types used throughout the crate: the address wrapper,
//! process and module descriptors, and error types.

mod address;
mod error;
mod process_info;

// Re-export all public types
pub use address::Address;
pub use error::{MemoryError, MemoryResult};
pub use process_info::{ModuleInfo, ProcessId, ProcessInfo};
