//! Process and module enumeration via Toolhelp32 snapshots

use super::handle::OwnedHandle;
use super::memory::WindowsProcessMemory;
use super::{last_error_string, strings::ansi_to_string};
use crate::core::types::{Address, MemoryError, MemoryResult, ModuleInfo, ProcessId, ProcessInfo};
use crate::os::{ModuleDirectory, ProcessDirectory, ProcessMemory};
use std::mem;
use winapi::shared::minwindef::FALSE;
use winapi::um::processthreadsapi::OpenProcess;
use winapi::um::tlhelp32::{
    CreateToolhelp32Snapshot, Module32First, Module32Next, Process32First, Process32Next,
    MODULEENTRY32, PROCESSENTRY32, TH32CS_SNAPMODULE, TH32CS_SNAPMODULE32, TH32CS_SNAPPROCESS,
};
use winapi::um::winnt::PROCESS_ALL_ACCESS;

/// System process directory backed by `CreateToolhelp32Snapshot`.
///
/// Each call to [`processes`](ProcessDirectory::processes) takes a fresh
/// point-in-time snapshot; the result is never cached here.
pub struct ToolhelpProcessDirectory;

impl ProcessDirectory for ToolhelpProcessDirectory {
    fn processes(&self) -> MemoryResult<Vec<ProcessInfo>> {
        let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) };
        let snapshot = OwnedHandle::new(snapshot);
        if snapshot.is_invalid() {
            return Err(MemoryError::EnumerationUnavailable(last_error_string()));
        }

        let mut entry: PROCESSENTRY32 = unsafe { mem::zeroed() };
        entry.dwSize = mem::size_of::<PROCESSENTRY32>() as u32;

        let mut processes = Vec::new();
        unsafe {
            if Process32First(snapshot.raw(), &mut entry) != FALSE {
                loop {
                    processes.push(ProcessInfo::new(
                        entry.th32ProcessID,
                        ansi_to_string(&entry.szExeFile),
                    ));
                    if Process32Next(snapshot.raw(), &mut entry) == FALSE {
                        break;
                    }
                }
            }
        }

        Ok(processes)
    }

    fn open(&self, pid: ProcessId) -> MemoryResult<Box<dyn ProcessMemory>> {
        let handle = unsafe { OpenProcess(PROCESS_ALL_ACCESS, FALSE, pid) };
        if handle.is_null() {
            return Err(MemoryError::WindowsApi(format!(
                "OpenProcess({pid}) failed: {}",
                last_error_string()
            )));
        }
        Ok(Box::new(WindowsProcessMemory::new(OwnedHandle::new(handle))))
    }
}

/// Per-process module directory backed by `CreateToolhelp32Snapshot`.
///
/// Snapshot creation fails when the target process no longer exists; a live
/// process with no enumerable modules yields an empty list instead.
pub struct ToolhelpModuleDirectory;

impl ModuleDirectory for ToolhelpModuleDirectory {
    fn modules(&self, pid: ProcessId) -> MemoryResult<Vec<ModuleInfo>> {
        let snapshot =
            unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPMODULE | TH32CS_SNAPMODULE32, pid) };
        let snapshot = OwnedHandle::new(snapshot);
        if snapshot.is_invalid() {
            return Err(MemoryError::module_enumeration_failed(
                pid,
                last_error_string(),
            ));
        }

        let mut entry: MODULEENTRY32 = unsafe { mem::zeroed() };
        entry.dwSize = mem::size_of::<MODULEENTRY32>() as u32;

        let mut modules = Vec::new();
        unsafe {
            if Module32First(snapshot.raw(), &mut entry) != FALSE {
                loop {
                    modules.push(ModuleInfo::new(
                        ansi_to_string(&entry.szModule),
                        Address::new(entry.modBaseAddr as usize),
                        entry.modBaseSize as usize,
                    ));
                    if Module32Next(snapshot.raw(), &mut entry) == FALSE {
                        break;
                    }
                }
            }
        }

        Ok(modules)
    }
}
