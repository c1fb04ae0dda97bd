//! Solver trait for abstraction over different backends.

use crate::{SolveResult, SolverConfig, SolverError};

/// Trait for solver implementations.
///
/// A backend owns its model representation; `solve` is a blocking call
/// that always produces a [`SolveResult`] unless the backend itself
/// cannot run (empty model, missing objective, unavailable collaborator).
pub trait Solve {
    /// Solve with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] for construction/environment failures.
    /// Infeasibility and unboundedness are reported through the result's
    /// status, not as errors.
    fn solve(&mut self, config: &SolverConfig) -> Result<SolveResult, SolverError>;
}
