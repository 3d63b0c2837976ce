//! Process attachment by executable name with owned handle lifecycle

use crate::core::types::{MemoryResult, ProcessId};
use crate::os::{ProcessDirectory, ProcessMemory};
use std::fmt;
use tracing::debug;

/// An attachment to a running process, resolved by exact executable name.
///
/// Attachment lands in one of three terminal states, decided once:
/// no matching process (pid 0, not connected), found but the open failed
/// (pid known, not connected), or connected. There is no reconnect; a new
/// handle must be attached instead.
///
/// The OS handle behind a connected instance is owned exclusively and
/// released exactly once, on [`release`](ProcessHandle::release) or drop.
pub struct ProcessHandle {
    name: String,
    pid: ProcessId,
    candidates: Vec<ProcessId>,
    memory: Option<Box<dyn ProcessMemory>>,
}

impl ProcessHandle {
    /// Attaches to the first running process whose executable name exactly
    /// matches `process_name`, using the system process directory.
    #[cfg(windows)]
    pub fn attach(process_name: &str) -> MemoryResult<Self> {
        Self::attach_with(process_name, &crate::os::ToolhelpProcessDirectory)
    }

    /// Attaches through an explicit process directory capability.
    ///
    /// Matching is exact and case-sensitive. When several processes share
    /// the executable name the first one in enumeration order wins; every
    /// matching pid is kept in [`candidates`](ProcessHandle::candidates) so
    /// callers can detect and resolve the ambiguity themselves.
    ///
    /// "No match" is a non-connected result, not an error. Only a failure of
    /// the enumeration facility itself is returned as `Err`.
    pub fn attach_with(
        process_name: &str,
        directory: &dyn ProcessDirectory,
    ) -> MemoryResult<Self> {
        let processes = directory.processes()?;
        let candidates: Vec<ProcessId> = processes
            .iter()
            .filter(|p| p.name == process_name)
            .map(|p| p.pid)
            .collect();

        let Some(&pid) = candidates.first() else {
            debug!(process = process_name, "no running process matched");
            return Ok(ProcessHandle {
                name: process_name.to_owned(),
                pid: 0,
                candidates,
                memory: None,
            });
        };

        if candidates.len() > 1 {
            debug!(
                process = process_name,
                chosen = pid,
                matches = candidates.len(),
                "multiple processes share this name, using first match"
            );
        }

        let memory = match directory.open(pid) {
            Ok(memory) => {
                debug!(process = process_name, pid, "attached");
                Some(memory)
            }
            Err(err) => {
                debug!(process = process_name, pid, %err, "process found but open failed");
                None
            }
        };

        Ok(ProcessHandle {
            name: process_name.to_owned(),
            pid,
            candidates,
            memory,
        })
    }

    /// True iff a matching process was found and the open succeeded
    pub fn is_connected(&self) -> bool {
        self.pid != 0 && self.memory.is_some()
    }

    /// Process id of the attached process, or 0 if none matched
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Executable name this handle was attached with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every pid whose executable name matched at attach time, in
    /// enumeration order. The first entry is the one attached to.
    pub fn candidates(&self) -> &[ProcessId] {
        &self.candidates
    }

    /// Releases the OS handle. Idempotent; safe to call on a handle that
    /// never connected. After release no memory operation can succeed.
    pub fn release(&mut self) {
        if self.memory.take().is_some() {
            debug!(process = %self.name, pid = self.pid, "released process handle");
        }
    }

    /// Memory capability of the connected process, if any
    pub(crate) fn memory(&self) -> Option<&dyn ProcessMemory> {
        self.memory.as_deref()
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("name", &self.name)
            .field("pid", &self.pid)
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProcessHandle(name={}, pid={}, connected={})",
            self.name,
            self.pid,
            self.is_connected()
        )
    }
}
