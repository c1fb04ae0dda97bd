//! Solve result and typed accessors.

use crate::SolverStatus;
use linopt_expr::VariableId;

/// Misuse of result accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultError {
    /// The result's status carries no value assignment.
    NoSolution { status: SolverStatus },
    /// The variable does not belong to the model that produced the result.
    UnknownVariable(VariableId),
}

impl ResultError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ResultError::NoSolution { .. } => "RESULT_NO_SOLUTION",
            ResultError::UnknownVariable(_) => "RESULT_UNKNOWN_VARIABLE",
        }
    }
}

impl std::fmt::Display for ResultError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultError::NoSolution { status } => write!(
                f,
                "[{}] No solution available for status: {}",
                self.code(),
                status
            ),
            ResultError::UnknownVariable(id) => write!(
                f,
                "[{}] Variable ID {} is not part of the solved model",
                self.code(),
                id.inner()
            ),
        }
    }
}

impl std::error::Error for ResultError {}

/// Outcome of one solve attempt over a model.
///
/// Always carries a status; the objective value and variable values are
/// present only when the status carries a solution. The result also
/// records the model revision it was produced from, so callers can tell
/// when a result describes a pre-mutation model.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub(crate) status: SolverStatus,
    pub(crate) objective_value: Option<f64>,
    /// Variable values indexed by internal variable position.
    pub(crate) variable_values: Option<Vec<f64>>,
    pub(crate) num_variables: usize,
    pub(crate) model_revision: u64,
    pub(crate) solve_time_seconds: f64,
    /// Backend diagnostic for `Error` status.
    pub(crate) message: Option<String>,
}

impl SolveResult {
    /// Build a result carrying a value assignment.
    pub fn with_solution(
        status: SolverStatus,
        objective_value: f64,
        variable_values: Vec<f64>,
        model_revision: u64,
        solve_time_seconds: f64,
    ) -> Self {
        debug_assert!(status.has_solution());
        Self {
            status,
            objective_value: Some(objective_value),
            num_variables: variable_values.len(),
            variable_values: Some(variable_values),
            model_revision,
            solve_time_seconds,
            message: None,
        }
    }

    /// Build a result for a terminal status without values
    /// (infeasible, unbounded, timeout, error).
    pub fn without_solution(
        status: SolverStatus,
        num_variables: usize,
        model_revision: u64,
        solve_time_seconds: f64,
        message: Option<String>,
    ) -> Self {
        debug_assert!(!status.has_solution());
        Self {
            status,
            objective_value: None,
            variable_values: None,
            num_variables,
            model_revision,
            solve_time_seconds,
            message,
        }
    }

    /// Get the solver status.
    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Get the objective value.
    ///
    /// Fails with [`ResultError::NoSolution`] when the status carries no
    /// solution.
    pub fn objective(&self) -> Result<f64, ResultError> {
        self.objective_value.ok_or(ResultError::NoSolution {
            status: self.status,
        })
    }

    /// Get the value of a variable at the solution.
    ///
    /// Fails with [`ResultError::NoSolution`] when the status carries no
    /// solution, or [`ResultError::UnknownVariable`] when the variable is
    /// not part of the model that produced this result.
    ///
    /// Membership is checked by index: IDs are dense per-model indices,
    /// so only IDs at or beyond the solved model's variable count are
    /// rejected. An ID minted by a different model with an in-range index
    /// reads that position of this result; callers mixing models should
    /// check [`SolveResult::is_stale`] against the model they hold.
    pub fn get_value(&self, var_id: VariableId) -> Result<f64, ResultError> {
        let values = self
            .variable_values
            .as_ref()
            .ok_or(ResultError::NoSolution {
                status: self.status,
            })?;
        values
            .get(var_id.inner() as usize)
            .copied()
            .ok_or(ResultError::UnknownVariable(var_id))
    }

    /// All variable values, if the status carries a solution.
    pub fn variable_values(&self) -> Option<&[f64]> {
        self.variable_values.as_deref()
    }

    /// Number of variables in the solved model.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Revision of the model at solve time.
    pub fn model_revision(&self) -> u64 {
        self.model_revision
    }

    /// Whether the model has been mutated since this result was produced.
    ///
    /// A stale result still describes the pre-mutation model.
    pub fn is_stale(&self, current_model_revision: u64) -> bool {
        current_model_revision != self.model_revision
    }

    /// Get solve time in seconds.
    pub fn solve_time_seconds(&self) -> f64 {
        self.solve_time_seconds
    }

    /// Backend diagnostic message, if any (set for `Error` status).
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Check if the result is optimal.
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }

    /// Check if the result carries a value assignment.
    pub fn has_solution(&self) -> bool {
        self.status.has_solution()
    }

    /// Get a human-readable status string.
    pub fn status_string(&self) -> &'static str {
        self.status.as_str()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn optimal_result() -> SolveResult {
        SolveResult::with_solution(SolverStatus::Optimal, 10.0, vec![1.0, 2.0, 3.0], 7, 0.05)
    }

    #[test]
    fn accessors_on_optimal_result() {
        let result = optimal_result();
        assert!(result.is_optimal());
        assert!(result.has_solution());
        assert_eq!(result.objective().unwrap(), 10.0);
        assert_eq!(result.get_value(VariableId::new(0)).unwrap(), 1.0);
        assert_eq!(result.get_value(VariableId::new(2)).unwrap(), 3.0);
        assert_eq!(result.num_variables(), 3);
        assert_eq!(result.model_revision(), 7);
        assert_eq!(result.status_string(), "optimal");
    }

    #[test]
    fn unknown_variable_is_rejected() {
        let result = optimal_result();
        let foreign = VariableId::new(3);
        assert_eq!(
            result.get_value(foreign),
            Err(ResultError::UnknownVariable(foreign))
        );
    }

    #[test]
    fn get_value_is_positional() {
        // Membership is by dense index: an ID from another model with an
        // in-range index reads that position, only out-of-range IDs fail.
        let result = optimal_result();
        assert_eq!(result.get_value(VariableId::new(1)).unwrap(), 2.0);
        assert!(result.get_value(VariableId::new(3)).is_err());
    }

    #[test]
    fn no_solution_statuses_reject_value_access() {
        let result = SolveResult::without_solution(SolverStatus::Infeasible, 2, 1, 0.01, None);
        assert!(!result.has_solution());
        assert_eq!(
            result.get_value(VariableId::new(0)),
            Err(ResultError::NoSolution {
                status: SolverStatus::Infeasible
            })
        );
        assert_eq!(
            result.objective(),
            Err(ResultError::NoSolution {
                status: SolverStatus::Infeasible
            })
        );
    }

    #[test]
    fn staleness_tracks_model_revision() {
        let result = optimal_result();
        assert!(!result.is_stale(7));
        assert!(result.is_stale(8));
    }

    #[test]
    fn error_status_carries_message() {
        let result = SolveResult::without_solution(
            SolverStatus::Error,
            1,
            0,
            0.0,
            Some("numerical trouble".to_string()),
        );
        assert_eq!(result.message(), Some("numerical trouble"));
        assert_eq!(result.status(), SolverStatus::Error);
    }

    #[test]
    fn result_error_display() {
        let err = ResultError::NoSolution {
            status: SolverStatus::Unbounded,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("[RESULT_NO_SOLUTION]"));
        assert!(msg.contains("unbounded"));

        let err = ResultError::UnknownVariable(VariableId::new(9));
        assert!(err.to_string().contains('9'));
    }
}
