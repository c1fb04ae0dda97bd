//! Instrumentation helpers shared by linopt solver backends.

pub mod memory;

pub use memory::{current_rss_bytes, MemoryError, MemorySnapshot};
