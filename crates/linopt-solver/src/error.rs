//! Solver error types.
//!
//! These cover construction-time and environment failures only.
//! Solver-reported infeasibility or unboundedness is a
//! [`crate::SolverStatus`], never an error.

/// Error type for solver operations.
#[derive(Debug, Clone)]
pub enum SolverError {
    /// Model has no variables.
    EmptyModel,
    /// No objective function set.
    NoObjective,
    /// Invalid variable ID passed to the backend.
    InvalidVariableId(u32),
    /// Solver collaborator cannot be reached (e.g., library not installed).
    SolverUnavailable(String),
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::EmptyModel => "SOLVER_EMPTY_MODEL",
            SolverError::NoObjective => "SOLVER_NO_OBJECTIVE",
            SolverError::InvalidVariableId(_) => "SOLVER_INVALID_VARIABLE_ID",
            SolverError::SolverUnavailable(_) => "SOLVER_UNAVAILABLE",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::EmptyModel => write!(f, "[{}] Model has no variables", self.code()),
            SolverError::NoObjective => write!(f, "[{}] Model has no objective", self.code()),
            SolverError::InvalidVariableId(id) => {
                write!(f, "[{}] Variable ID {} does not exist", self.code(), id)
            }
            SolverError::SolverUnavailable(msg) => {
                write!(f, "[{}] Solver not available: {}", self.code(), msg)
            }
        }
    }
}

impl std::error::Error for SolverError {}
