//! Process and module descriptors produced by OS enumeration

use super::address::Address;
use serde::{Deserialize, Serialize};

/// Process identifier type
pub type ProcessId = u32;

/// One running process as reported by the OS process directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process ID
    pub pid: ProcessId,
    /// Executable file name (e.g. "notepad.exe")
    pub name: String,
}

impl ProcessInfo {
    /// Creates a new process descriptor
    pub fn new(pid: ProcessId, name: String) -> Self {
        ProcessInfo { pid, name }
    }
}

/// One module loaded into a target process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module name as reported by the OS (case preserved)
    pub name: String,
    /// Load base address inside the target process
    pub base_address: Address,
    /// Size of the mapped image in bytes
    pub size: usize,
}

impl ModuleInfo {
    /// Creates a new module descriptor
    pub fn new(name: String, base_address: Address, size: usize) -> Self {
        ModuleInfo {
            name,
            base_address,
            size,
        }
    }

    /// Checks whether an address falls inside this module's mapped range
    pub fn contains_address(&self, address: Address) -> bool {
        address >= self.base_address && address.as_usize() < self.base_address.as_usize() + self.size
    }
}
