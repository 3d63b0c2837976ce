//! Typed memory operations against an attached process
//!
//! [`MemoryAccessor`] resolves module base addresses (with memoization) and
//! performs typed reads and writes; [`Pod`] bounds the types allowed to
//! cross the process boundary.

pub mod accessor;
pub mod pod;

pub use accessor::MemoryAccessor;
pub use pod::Pod;
