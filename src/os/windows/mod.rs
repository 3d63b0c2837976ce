//! Windows implementations of the OS capability traits
//!
//! Process and module enumeration go through Toolhelp32 snapshots, memory
//! I/O through `ReadProcessMemory` / `WriteProcessMemory`. All handles are
//! held in [`OwnedHandle`] wrappers so they close exactly once.

mod handle;
mod memory;
mod strings;
mod toolhelp;

pub use handle::OwnedHandle;
pub use memory::WindowsProcessMemory;
pub use toolhelp::{ToolhelpModuleDirectory, ToolhelpProcessDirectory};

/// Formats the calling thread's last OS error
pub(crate) fn last_error_string() -> String {
    windows::core::Error::from_win32().to_string()
}
