//! Module base resolution and typed cross-process memory I/O

use super::pod::Pod;
use crate::core::types::{Address, MemoryError, MemoryResult};
use crate::os::ModuleDirectory;
use crate::process::ProcessHandle;
use std::collections::HashMap;
use std::sync::Mutex;
use std::{mem, ptr, slice};
use tracing::trace;

/// Typed memory access to the process behind a [`ProcessHandle`].
///
/// Borrows the handle for its whole lifetime, so the borrow checker enforces
/// that an accessor never outlives the attachment it reads through, and that
/// the handle cannot be released while an accessor exists.
///
/// Module bases are memoized per accessor. A lookup that finds nothing is
/// cached as [`Address::null()`] and never re-queried; this negative caching
/// is a deliberate invariant, not an accident of lazy insertion, because it
/// keeps known-absent modules from triggering a full enumeration on every
/// call. Entries are never evicted or overwritten.
pub struct MemoryAccessor<'p> {
    handle: &'p ProcessHandle,
    directory: Box<dyn ModuleDirectory>,
    module_cache: Mutex<HashMap<String, Address>>,
}

impl<'p> MemoryAccessor<'p> {
    /// Creates an accessor over the system module directory
    #[cfg(windows)]
    pub fn new(handle: &'p ProcessHandle) -> Self {
        Self::with_directory(handle, Box::new(crate::os::ToolhelpModuleDirectory))
    }

    /// Creates an accessor over an explicit module directory capability
    pub fn with_directory(handle: &'p ProcessHandle, directory: Box<dyn ModuleDirectory>) -> Self {
        MemoryAccessor {
            handle,
            directory,
            module_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves the load base address of `module_name` in the target process.
    ///
    /// Returns [`Address::null()`] when no module matches; callers must
    /// treat that as "not present", not as an address. Matching is exact and
    /// case-sensitive against the name the OS reports. Both hits and misses
    /// are served from the cache after the first lookup; at most one module
    /// enumeration ever happens per distinct name.
    pub fn resolve_module_base(&self, module_name: &str) -> MemoryResult<Address> {
        if !self.handle.is_connected() {
            return Err(MemoryError::NotConnected);
        }

        if let Some(&base) = self.module_cache.lock().unwrap().get(module_name) {
            trace!(module = module_name, %base, "module base served from cache");
            return Ok(base);
        }

        let modules = self.directory.modules(self.handle.pid())?;
        let resolved = modules
            .iter()
            .find(|m| m.name == module_name)
            .map(|m| m.base_address)
            .unwrap_or_else(Address::null);

        // First resolution wins; a concurrent lookup that raced us keeps its
        // own entry and we return that instead.
        let base = *self
            .module_cache
            .lock()
            .unwrap()
            .entry(module_name.to_owned())
            .or_insert(resolved);
        trace!(module = module_name, %base, "module base resolved");
        Ok(base)
    }

    /// Reads raw bytes from the target process.
    ///
    /// Either the full `length` bytes arrive or this fails; a short read is
    /// an error, never a truncated or zero-padded buffer.
    pub fn read_raw(&self, address: Address, length: usize) -> MemoryResult<Vec<u8>> {
        let memory = self.memory()?;
        let mut buffer = vec![0u8; length];
        if length == 0 {
            return Ok(buffer);
        }

        let bytes_read = memory.read_bytes(address, &mut buffer)?;
        if bytes_read != length {
            return Err(MemoryError::short_read(address, length, bytes_read));
        }
        trace!(%address, length, "read");
        Ok(buffer)
    }

    /// Writes raw bytes into the target process.
    ///
    /// The OS-reported written-byte-count must equal the request; a short
    /// write is an error even when the OS reports overall success.
    pub fn write_raw(&self, address: Address, data: &[u8]) -> MemoryResult<()> {
        let memory = self.memory()?;
        if data.is_empty() {
            return Ok(());
        }

        let bytes_written = memory.write_bytes(address, data)?;
        if bytes_written != data.len() {
            return Err(MemoryError::short_write(address, data.len(), bytes_written));
        }
        trace!(%address, length = data.len(), "write");
        Ok(())
    }

    /// Reads one `T` from the target process at `address`
    pub fn read<T: Pod>(&self, address: Address) -> MemoryResult<T> {
        let buffer = self.read_raw(address, mem::size_of::<T>())?;
        // The buffer has exactly size_of::<T>() fully-read bytes, and Pod
        // guarantees any bit pattern is valid; alignment of the Vec is not,
        // so the copy must be unaligned.
        Ok(unsafe { ptr::read_unaligned(buffer.as_ptr().cast::<T>()) })
    }

    /// Reads `count` contiguous `T`s starting at `address`.
    ///
    /// Atomic over the whole range: one underlying read, and any failure
    /// yields no elements at all.
    pub fn read_array<T: Pod>(&self, address: Address, count: usize) -> MemoryResult<Vec<T>> {
        let element_size = mem::size_of::<T>();
        let buffer = self.read_raw(address, element_size * count)?;
        if element_size == 0 {
            return Ok(Vec::new());
        }

        let mut values = Vec::with_capacity(count);
        for chunk in buffer.chunks_exact(element_size) {
            values.push(unsafe { ptr::read_unaligned(chunk.as_ptr().cast::<T>()) });
        }
        Ok(values)
    }

    /// Writes one `T` into the target process at `address`
    pub fn write<T: Pod>(&self, address: Address, value: T) -> MemoryResult<()> {
        let bytes = unsafe {
            slice::from_raw_parts((&value as *const T).cast::<u8>(), mem::size_of::<T>())
        };
        self.write_raw(address, bytes)
    }

    /// Writes all of `values` contiguously starting at `address`, as one
    /// underlying write with strict byte-count verification
    pub fn write_array<T: Pod>(&self, address: Address, values: &[T]) -> MemoryResult<()> {
        let bytes = unsafe {
            slice::from_raw_parts(values.as_ptr().cast::<u8>(), mem::size_of_val(values))
        };
        self.write_raw(address, bytes)
    }

    fn memory(&self) -> MemoryResult<&dyn crate::os::ProcessMemory> {
        self.handle.memory().ok_or(MemoryError::NotConnected)
    }
}
