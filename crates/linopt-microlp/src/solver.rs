//! microlp solver implementation.

use linopt_core::{Model, Sense};
use linopt_expr::VariableId;
use linopt_solver::{Solve, SolveResult, SolverConfig, SolverError, SolverStatus};
use linopt_tools::MemorySnapshot;
use microlp::{ComparisonOp, OptimizationDirection, Problem};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Bridge from a linopt model to microlp.
///
/// Owns the model for the duration of solving; `solve` is blocking and
/// leaves the model untouched, so it can be solved repeatedly.
pub struct Solver {
    model: Model,
    config: SolverConfig,
}

impl Solver {
    /// Create a new solver from a Model.
    pub fn new(model: Model) -> Result<Self, SolverError> {
        validate_model(&model)?;

        debug!(
            component = "solver",
            operation = "init",
            status = "success",
            variables = model.num_variables() as u64,
            constraints = model.num_constraints() as u64,
            nnz = model.num_coefficients() as u64,
            "Creating solver from model"
        );

        Ok(Solver {
            model,
            config: SolverConfig::new(),
        })
    }

    fn update_config(&mut self, update: impl FnOnce(SolverConfig) -> SolverConfig) {
        self.config = update(std::mem::take(&mut self.config));
    }

    /// Set a time limit in seconds for the next solve.
    pub fn set_time_limit(&mut self, seconds: f64) {
        self.update_config(|config| config.with_time_limit(seconds));
    }

    /// Set verbosity level for the next solve.
    pub fn set_verbosity(&mut self, level: u32) {
        self.update_config(|config| config.with_verbosity(level));
    }

    /// Set feasibility tolerance for the next solve.
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.update_config(|config| config.with_tolerance(tolerance));
    }

    /// Get access to the current solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Set the solver configuration.
    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    /// Get access to the owned model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Get mutable access to the owned model.
    ///
    /// Mutations bump the model revision, which marks prior results stale.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// Solve the model and return the result.
    pub fn solve(&mut self) -> Result<SolveResult, SolverError> {
        self.solve_with_config(&self.config.clone())
    }

    /// Solve the model with a specific configuration.
    pub fn solve_with_config(&mut self, config: &SolverConfig) -> Result<SolveResult, SolverError> {
        solve_model(&self.model, config)
    }
}

impl Solve for Solver {
    fn solve(&mut self, config: &SolverConfig) -> Result<SolveResult, SolverError> {
        self.solve_with_config(config)
    }
}

/// Validate that a model is ready for solving.
fn validate_model(model: &Model) -> Result<(), SolverError> {
    if model.num_variables() == 0 {
        return Err(SolverError::EmptyModel);
    }
    Ok(())
}

// microlp has no notion of a constant objective offset, so the constant
// is added back onto the reported objective value after solving.
fn collect_objective_coefficients(
    model: &Model,
) -> Result<(Sense, BTreeMap<VariableId, f64>, f64), SolverError> {
    let objective = model.objective();
    let Some(sense) = objective.sense else {
        return Err(SolverError::NoObjective);
    };

    let mut objective_coeffs: BTreeMap<VariableId, f64> = BTreeMap::new();
    for (var_id, coeff) in &objective.terms {
        model
            .get_variable(*var_id)
            .map_err(|_| SolverError::InvalidVariableId(var_id.inner()))?;
        *objective_coeffs.entry(*var_id).or_insert(0.0) += *coeff;
    }

    Ok((sense, objective_coeffs, objective.constant))
}

// microlp exposes no tunables, so every explicitly set option is ignored.
fn warn_unsupported_options(config: &SolverConfig) {
    for option in config.set_option_names() {
        warn!(
            component = "solver",
            operation = "config",
            status = "warn",
            option,
            "microlp does not support this option; ignored"
        );
    }
}

fn integer_bound(value: f64, fallback: i32) -> i32 {
    if value.is_finite() {
        value.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    } else {
        fallback
    }
}

fn add_variables_to_problem(
    model: &Model,
    problem: &mut Problem,
    objective_coeffs: &BTreeMap<VariableId, f64>,
) -> Vec<microlp::Variable> {
    let mut columns = Vec::with_capacity(model.num_variables());

    for index in 0..model.num_variables() {
        let var_id = VariableId::new(index as u32);

        if let Ok(var) = model.get_variable(var_id) {
            let obj_coeff = objective_coeffs.get(&var_id).copied().unwrap_or(0.0);

            let col = if var.is_integer {
                problem.add_integer_var(
                    obj_coeff,
                    (
                        integer_bound(var.bounds.lower, i32::MIN),
                        integer_bound(var.bounds.upper, i32::MAX),
                    ),
                )
            } else {
                problem.add_var(obj_coeff, (var.bounds.lower, var.bounds.upper))
            };
            columns.push(col);

            trace!(
                component = "solver",
                operation = "add_variable",
                status = "success",
                var_id = var_id.inner(),
                lower = var.bounds.lower,
                upper = var.bounds.upper,
                obj_coeff,
                is_integer = var.is_integer,
                "Added variable to microlp"
            );
        }
    }

    debug!(
        component = "solver",
        operation = "add_variables",
        status = "success",
        num_vars = model.num_variables(),
        "Added all variables to microlp"
    );

    columns
}

fn add_rows_to_problem(model: &Model, problem: &mut Problem, columns: &[microlp::Variable]) {
    let rows = model.rows();
    let mut num_rows = 0usize;

    for (index, row) in rows.iter().enumerate() {
        let constraint_id = linopt_expr::ConstraintId::new(index as u32);
        let Ok(constraint) = model.get_constraint(constraint_id) else {
            continue;
        };
        let lower = constraint.bounds.lower;
        let upper = constraint.bounds.upper;

        let terms: Vec<(microlp::Variable, f64)> = row
            .iter()
            .map(|(var_id, coeff)| (columns[var_id.inner() as usize], *coeff))
            .collect();

        // Row bounds map onto microlp's single-comparison rows; a finite
        // range splits into one Ge and one Le row.
        if lower.is_finite() && upper.is_finite() && lower == upper {
            problem.add_constraint(terms.as_slice(), ComparisonOp::Eq, lower);
            num_rows += 1;
        } else {
            if lower.is_finite() {
                problem.add_constraint(terms.as_slice(), ComparisonOp::Ge, lower);
                num_rows += 1;
            }
            if upper.is_finite() {
                problem.add_constraint(terms.as_slice(), ComparisonOp::Le, upper);
                num_rows += 1;
            }
        }

        trace!(
            component = "solver",
            operation = "add_constraint",
            status = "success",
            constraint_id = constraint_id.inner(),
            lower,
            upper,
            num_coeffs = terms.len(),
            "Added constraint to microlp"
        );
    }

    debug!(
        component = "solver",
        operation = "add_constraints",
        status = "success",
        num_constraints = model.num_constraints(),
        num_backend_rows = num_rows,
        "Added all constraints to microlp"
    );
}

/// Solve a model with the given config.
///
/// Infeasibility and unboundedness come back as result statuses; only
/// construction failures (empty model, missing objective) are errors.
fn solve_model(model: &Model, config: &SolverConfig) -> Result<SolveResult, SolverError> {
    validate_model(model)?;
    warn_unsupported_options(config);

    let model_revision = model.revision();
    let rss_before = MemorySnapshot::capture("solve_start").ok();
    let solve_started = Instant::now();

    debug!(
        component = "solver",
        operation = "solve",
        status = "success",
        solver = "microlp",
        model_revision,
        rss_bytes = ?rss_before.as_ref().map(|s| s.rss_bytes),
        "Starting solve process"
    );

    let (sense, objective_coeffs, objective_constant) = collect_objective_coefficients(model)?;

    let direction = match sense {
        Sense::Minimize => OptimizationDirection::Minimize,
        Sense::Maximize => OptimizationDirection::Maximize,
    };
    let mut problem = Problem::new(direction);

    let columns = add_variables_to_problem(model, &mut problem, &objective_coeffs);
    add_rows_to_problem(model, &mut problem, &columns);

    let outcome = problem.solve();
    let solve_seconds = solve_started.elapsed().as_secs_f64();
    let rss_after = MemorySnapshot::capture("solve_end").ok();
    let rss_delta = match (&rss_before, &rss_after) {
        (Some(before), Some(after)) => Some(after.rss_delta(before)),
        _ => None,
    };

    let result = match outcome {
        Ok(solution) => {
            // var_value_rounded snaps integer variables to whole numbers
            // and passes continuous values through.
            let variable_values: Vec<f64> = columns
                .iter()
                .map(|&col| solution.var_value_rounded(col))
                .collect();
            SolveResult::with_solution(
                SolverStatus::Optimal,
                solution.objective() + objective_constant,
                variable_values,
                model_revision,
                solve_seconds,
            )
        }
        Err(microlp::Error::Infeasible) => SolveResult::without_solution(
            SolverStatus::Infeasible,
            model.num_variables(),
            model_revision,
            solve_seconds,
            None,
        ),
        Err(microlp::Error::Unbounded) => SolveResult::without_solution(
            SolverStatus::Unbounded,
            model.num_variables(),
            model_revision,
            solve_seconds,
            None,
        ),
        Err(microlp::Error::InternalError(message)) => SolveResult::without_solution(
            SolverStatus::Error,
            model.num_variables(),
            model_revision,
            solve_seconds,
            Some(message),
        ),
    };

    debug!(
        component = "solver",
        operation = "solve",
        status = "success",
        solver = "microlp",
        solver_status = result.status_string(),
        model_revision,
        duration_ms = solve_seconds * 1000.0,
        rss_bytes = ?rss_after.as_ref().map(|s| s.rss_bytes),
        rss_delta_bytes = ?rss_delta,
        "microlp solve completed"
    );

    if !result.has_solution() {
        warn!(
            component = "solver",
            operation = "solve",
            status = "warn",
            solver = "microlp",
            solver_status = result.status_string(),
            message = ?result.message(),
            "Solver finished without a solution"
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linopt_core::{Bounds, Variable};

    #[test]
    fn test_solver_new_rejects_empty_model() {
        let model = Model::new();
        let result = Solver::new(model);
        assert!(matches!(result, Err(SolverError::EmptyModel)));
    }

    #[test]
    fn test_solve_requires_objective_sense() {
        let mut model = Model::new();
        model
            .add_variable(Variable::continuous(Bounds::new(0.0, 1.0)))
            .unwrap();
        let mut solver = Solver::new(model).unwrap();
        assert!(matches!(solver.solve(), Err(SolverError::NoObjective)));
    }

    #[test]
    fn test_integer_bound_clamping() {
        assert_eq!(integer_bound(3.0, 0), 3);
        assert_eq!(integer_bound(f64::INFINITY, i32::MAX), i32::MAX);
        assert_eq!(integer_bound(f64::NEG_INFINITY, i32::MIN), i32::MIN);
        assert_eq!(integer_bound(1e12, 0), i32::MAX);
    }

    #[test]
    fn test_config_updates() {
        let mut model = Model::new();
        model
            .add_variable(Variable::continuous(Bounds::new(0.0, 1.0)))
            .unwrap();
        let mut solver = Solver::new(model).unwrap();

        solver.set_time_limit(30.0);
        solver.set_verbosity(2);
        solver.set_tolerance(1e-8);

        assert_eq!(solver.config().time_limit, Some(30.0));
        assert_eq!(solver.config().verbosity, Some(2));
        assert_eq!(solver.config().tolerance, Some(1e-8));
    }
}
