//! Cross-process memory I/O over ReadProcessMemory / WriteProcessMemory

use super::handle::OwnedHandle;
use super::last_error_string;
use crate::core::types::{Address, MemoryError, MemoryResult};
use crate::os::ProcessMemory;
use winapi::shared::minwindef::{FALSE, LPCVOID, LPVOID};

/// Memory access capability over one opened process handle.
///
/// Owns the handle exclusively; dropping this closes it.
pub struct WindowsProcessMemory {
    handle: OwnedHandle,
}

impl WindowsProcessMemory {
    /// Wraps an opened process handle
    pub fn new(handle: OwnedHandle) -> Self {
        WindowsProcessMemory { handle }
    }
}

impl ProcessMemory for WindowsProcessMemory {
    fn read_bytes(&self, address: Address, buffer: &mut [u8]) -> MemoryResult<usize> {
        let mut bytes_read = 0usize;
        let result = unsafe {
            winapi::um::memoryapi::ReadProcessMemory(
                self.handle.raw(),
                address.as_usize() as LPCVOID,
                buffer.as_mut_ptr() as LPVOID,
                buffer.len(),
                &mut bytes_read,
            )
        };

        if result == FALSE {
            Err(MemoryError::read_failed(
                address,
                buffer.len(),
                last_error_string(),
            ))
        } else {
            Ok(bytes_read)
        }
    }

    fn write_bytes(&self, address: Address, data: &[u8]) -> MemoryResult<usize> {
        let mut bytes_written = 0usize;
        let result = unsafe {
            winapi::um::memoryapi::WriteProcessMemory(
                self.handle.raw(),
                address.as_usize() as LPVOID,
                data.as_ptr() as LPCVOID,
                data.len(),
                &mut bytes_written,
            )
        };

        if result == FALSE {
            Err(MemoryError::write_failed(
                address,
                data.len(),
                last_error_string(),
            ))
        } else {
            Ok(bytes_written)
        }
    }
}
