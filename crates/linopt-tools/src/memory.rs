//! Memory instrumentation for solve stages.

use std::time::{Duration, Instant};
use sysinfo::System;

/// Errors produced by memory instrumentation.
#[derive(Debug, Clone)]
pub enum MemoryError {
    ProcessNotFound { pid: u32 },
}

impl std::fmt::Display for MemoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryError::ProcessNotFound { pid } => {
                write!(f, "failed to locate process {}", pid)
            }
        }
    }
}

impl std::error::Error for MemoryError {}

/// Resident set size of the current process, in bytes.
///
/// # Errors
///
/// Returns an error if the current process cannot be located.
pub fn current_rss_bytes() -> Result<u64, MemoryError> {
    let pid = sysinfo::Pid::from(std::process::id() as usize);

    // Only refresh the specific process we care about, not the entire system
    let mut sys = System::new();
    sys.refresh_processes_specifics(
        sysinfo::ProcessesToUpdate::Some(&[pid]),
        true,
        sysinfo::ProcessRefreshKind::nothing().with_memory(),
    );

    let process = sys.process(pid).ok_or(MemoryError::ProcessNotFound {
        pid: std::process::id(),
    })?;

    // sysinfo 0.33+ returns memory in bytes directly
    Ok(process.memory())
}

/// RSS and wall clock at one point of a named stage.
///
/// Solver backends capture a snapshot at each end of a solve and log the
/// delta alongside the result.
#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    /// Resident set size in bytes
    pub rss_bytes: u64,
    /// Timestamp when this snapshot was captured
    pub captured_at: Instant,
    /// Stage label (e.g., "solve_start", "solve_end")
    pub stage: &'static str,
}

impl MemorySnapshot {
    /// Capture the current memory state for a given stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the current process cannot be located.
    pub fn capture(stage: &'static str) -> Result<Self, MemoryError> {
        Ok(MemorySnapshot {
            rss_bytes: current_rss_bytes()?,
            captured_at: Instant::now(),
            stage,
        })
    }

    /// RSS growth since an earlier snapshot (negative means shrinkage).
    pub fn rss_delta(&self, earlier: &Self) -> i64 {
        self.rss_bytes as i64 - earlier.rss_bytes as i64
    }

    /// Wall-clock time since an earlier snapshot.
    pub fn elapsed_since(&self, earlier: &Self) -> Duration {
        self.captured_at.duration_since(earlier.captured_at)
    }
}
