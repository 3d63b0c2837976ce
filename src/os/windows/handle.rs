//! Safe HANDLE wrapper with automatic cleanup

use std::ptr;
use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
use winapi::um::winnt::HANDLE;

/// Owning wrapper around a Windows HANDLE with RAII semantics.
///
/// Non-copyable by construction; the handle is closed exactly once when the
/// wrapper is dropped, on every exit path. Move-only transfer via [`take`].
///
/// [`take`]: OwnedHandle::take
pub struct OwnedHandle {
    handle: HANDLE,
}

impl OwnedHandle {
    /// Wraps a raw handle, taking ownership of it
    pub fn new(handle: HANDLE) -> Self {
        OwnedHandle { handle }
    }

    /// Creates a null handle
    pub fn null() -> Self {
        OwnedHandle {
            handle: ptr::null_mut(),
        }
    }

    /// Checks if the handle is null or the INVALID_HANDLE_VALUE sentinel
    pub fn is_invalid(&self) -> bool {
        self.handle.is_null() || self.handle == INVALID_HANDLE_VALUE
    }

    /// Gets the raw handle without giving up ownership
    pub fn raw(&self) -> HANDLE {
        self.handle
    }

    /// Takes ownership of the raw handle, preventing automatic cleanup
    pub fn take(mut self) -> HANDLE {
        let handle = self.handle;
        self.handle = ptr::null_mut();
        handle
    }
}

impl Drop for OwnedHandle {
    fn drop(&mut self) {
        if !self.is_invalid() {
            // Ignore errors on cleanup
            unsafe {
                CloseHandle(self.handle);
            }
            self.handle = ptr::null_mut();
        }
    }
}

// Send + Sync are safe because HANDLEs are process-local
unsafe impl Send for OwnedHandle {}
unsafe impl Sync for OwnedHandle {}
