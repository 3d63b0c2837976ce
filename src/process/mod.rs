//! Process attachment and handle lifecycle

pub mod handle;

pub use handle::ProcessHandle;
