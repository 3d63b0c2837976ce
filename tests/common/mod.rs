//! Fake OS capabilities shared by the integration suites
//!
//! `FakeMemory` backs a target process with an in-memory buffer and can be
//! told to report short transfers; `FakeProcessDirectory` and
//! `FakeModuleDirectory` script enumeration results and count the calls the
//! library issues against them.

#![allow(dead_code)]

use procmem::{
    Address, MemoryError, MemoryResult, ModuleDirectory, ModuleInfo, ProcessDirectory, ProcessId,
    ProcessInfo, ProcessMemory, ProcessHandle,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for a target process's address space
pub struct FakeMemory {
    base: usize,
    data: Mutex<Vec<u8>>,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
    short_read: AtomicBool,
    short_write: AtomicBool,
}

impl FakeMemory {
    pub fn new(base: usize, size: usize) -> Arc<Self> {
        Arc::new(FakeMemory {
            base,
            data: Mutex::new(vec![0u8; size]),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
            short_read: AtomicBool::new(false),
            short_write: AtomicBool::new(false),
        })
    }

    /// Seeds the backing buffer at `offset` from the base
    pub fn fill(&self, offset: usize, bytes: &[u8]) {
        let mut data = self.data.lock().unwrap();
        data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Copy of the whole backing buffer
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.lock().unwrap().clone()
    }

    /// When set, reads report one byte fewer than requested without failing
    pub fn set_short_read(&self, on: bool) {
        self.short_read.store(on, Ordering::SeqCst);
    }

    /// When set, writes report one byte fewer than requested without failing
    pub fn set_short_write(&self, on: bool) {
        self.short_write.store(on, Ordering::SeqCst);
    }

    fn start_offset(&self, address: Address, length: usize) -> Option<usize> {
        let start = address.as_usize().checked_sub(self.base)?;
        if start + length > self.data.lock().unwrap().len() {
            return None;
        }
        Some(start)
    }
}

/// `ProcessMemory` view over a shared [`FakeMemory`]
pub struct SharedMemory(pub Arc<FakeMemory>);

impl ProcessMemory for SharedMemory {
    fn read_bytes(&self, address: Address, buffer: &mut [u8]) -> MemoryResult<usize> {
        self.0.reads.fetch_add(1, Ordering::SeqCst);
        let start = self
            .0
            .start_offset(address, buffer.len())
            .ok_or_else(|| MemoryError::read_failed(address, buffer.len(), "unmapped"))?;

        let data = self.0.data.lock().unwrap();
        if self.0.short_read.load(Ordering::SeqCst) && !buffer.is_empty() {
            let short = buffer.len() - 1;
            buffer[..short].copy_from_slice(&data[start..start + short]);
            return Ok(short);
        }
        buffer.copy_from_slice(&data[start..start + buffer.len()]);
        Ok(buffer.len())
    }

    fn write_bytes(&self, address: Address, data: &[u8]) -> MemoryResult<usize> {
        self.0.writes.fetch_add(1, Ordering::SeqCst);
        let start = self
            .0
            .start_offset(address, data.len())
            .ok_or_else(|| MemoryError::write_failed(address, data.len(), "unmapped"))?;

        let mut backing = self.0.data.lock().unwrap();
        if self.0.short_write.load(Ordering::SeqCst) && !data.is_empty() {
            let short = data.len() - 1;
            backing[start..start + short].copy_from_slice(&data[..short]);
            return Ok(short);
        }
        backing[start..start + data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

/// Scripted process directory
pub struct FakeProcessDirectory {
    processes: Vec<ProcessInfo>,
    memory: Arc<FakeMemory>,
    enumeration_fails: bool,
    open_fails: bool,
    pub opens: AtomicUsize,
}

impl FakeProcessDirectory {
    pub fn new(processes: Vec<ProcessInfo>, memory: Arc<FakeMemory>) -> Self {
        FakeProcessDirectory {
            processes,
            memory,
            enumeration_fails: false,
            open_fails: false,
            opens: AtomicUsize::new(0),
        }
    }

    pub fn failing_enumeration() -> Self {
        let mut directory = Self::new(vec![], FakeMemory::new(0, 0));
        directory.enumeration_fails = true;
        directory
    }

    pub fn with_open_failure(processes: Vec<ProcessInfo>) -> Self {
        let mut directory = Self::new(processes, FakeMemory::new(0, 0));
        directory.open_fails = true;
        directory
    }
}

impl ProcessDirectory for FakeProcessDirectory {
    fn processes(&self) -> MemoryResult<Vec<ProcessInfo>> {
        if self.enumeration_fails {
            return Err(MemoryError::EnumerationUnavailable(
                "snapshot could not be created".to_string(),
            ));
        }
        Ok(self.processes.clone())
    }

    fn open(&self, pid: ProcessId) -> MemoryResult<Box<dyn ProcessMemory>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if self.open_fails {
            return Err(MemoryError::WindowsApi(format!(
                "OpenProcess({pid}) failed: access denied"
            )));
        }
        Ok(Box::new(SharedMemory(self.memory.clone())))
    }
}

/// Scripted module directory with a call counter
pub struct FakeModuleDirectory {
    modules: Vec<ModuleInfo>,
    fails: bool,
    pub calls: Arc<AtomicUsize>,
}

impl FakeModuleDirectory {
    pub fn new(modules: Vec<ModuleInfo>) -> Self {
        FakeModuleDirectory {
            modules,
            fails: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        let mut directory = Self::new(vec![]);
        directory.fails = true;
        directory
    }
}

impl ModuleDirectory for FakeModuleDirectory {
    fn modules(&self, pid: ProcessId) -> MemoryResult<Vec<ModuleInfo>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fails {
            return Err(MemoryError::module_enumeration_failed(
                pid,
                "process has exited",
            ));
        }
        Ok(self.modules.clone())
    }
}

pub const TARGET_PID: ProcessId = 4242;
pub const TARGET_NAME: &str = "target.exe";

pub fn target_process() -> ProcessInfo {
    ProcessInfo::new(TARGET_PID, TARGET_NAME.to_string())
}

/// Attaches a connected handle backed by the given fake memory
pub fn connected_handle(memory: &Arc<FakeMemory>) -> ProcessHandle {
    let directory = FakeProcessDirectory::new(vec![target_process()], memory.clone());
    let handle = ProcessHandle::attach_with(TARGET_NAME, &directory).unwrap();
    assert!(handle.is_connected());
    handle
}
