//! Model builder methods for adding variables, constraints, and objectives.

use crate::types::{Bounds, Constraint, Objective, Sense, Variable};
use linopt_expr::expr::{ConstraintExpr, Expr};
use linopt_expr::ids::{ConstraintId, VariableId};

use crate::model::error::ModelError;
use crate::model::indexed::VariableMap;
use crate::model::Model;

impl Model {
    /// Add a variable to the model.
    pub fn add_variable(&mut self, variable: Variable) -> Result<VariableId, ModelError> {
        if !variable.bounds.is_valid() {
            return Err(ModelError::InvalidVariableBounds {
                lower: variable.bounds.lower,
                upper: variable.bounds.upper,
            });
        }

        let id = VariableId::new(self.next_variable_id);
        self.next_variable_id += 1;

        self.variables.insert(id, variable);
        self.bump_revision();

        Ok(id)
    }

    /// Add a variable and record its name in one step.
    pub fn add_variable_named(
        &mut self,
        variable: Variable,
        name: &str,
    ) -> Result<VariableId, ModelError> {
        let id = self.add_variable(variable)?;
        self.set_variable_name(id, name.to_string())?;
        Ok(id)
    }

    /// Add a constraint row to the model.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, ModelError> {
        if !constraint.bounds.is_valid() {
            return Err(ModelError::InvalidConstraintBounds {
                lower: constraint.bounds.lower,
                upper: constraint.bounds.upper,
            });
        }

        let id = ConstraintId::new(self.next_constraint_id);
        self.next_constraint_id += 1;

        self.constraints.insert(id, constraint);
        self.bump_revision();

        Ok(id)
    }

    /// Set the objective function, replacing any prior objective.
    pub fn set_objective(&mut self, objective: Objective) -> Result<(), ModelError> {
        let sense = objective.sense.ok_or(ModelError::NoObjective)?;
        for (var_id, coeff) in &objective.terms {
            self.ensure_variable_exists(*var_id)?;
            if !coeff.is_finite() {
                return Err(ModelError::InvalidCoefficient {
                    coefficient: *coeff,
                });
            }
        }
        if !objective.constant.is_finite() {
            return Err(ModelError::InvalidCoefficient {
                coefficient: objective.constant,
            });
        }

        let normalized = self.normalize_terms(objective.terms);
        self.objective = Objective {
            sense: Some(sense),
            terms: normalized,
            constant: objective.constant,
        };
        self.objective_name = None;
        self.bump_revision();
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            sense = sense.as_str(),
            terms = self.objective.terms.len(),
            constant = self.objective.constant,
            "Set objective function"
        );
        Ok(())
    }

    /// Minimize a linear expression, replacing any prior objective.
    ///
    /// The expression's constant term becomes the objective's constant
    /// offset and shifts the reported objective value.
    pub fn minimize(&mut self, expr: Expr) -> Result<(), ModelError> {
        let (terms, constant) = expr.into_parts();
        self.set_objective(Objective {
            sense: Some(Sense::Minimize),
            terms,
            constant,
        })
    }

    /// Maximize a linear expression, replacing any prior objective.
    ///
    /// The expression's constant term becomes the objective's constant
    /// offset and shifts the reported objective value.
    pub fn maximize(&mut self, expr: Expr) -> Result<(), ModelError> {
        let (terms, constant) = expr.into_parts();
        self.set_objective(Objective {
            sense: Some(Sense::Maximize),
            terms,
            constant,
        })
    }

    /// Add a constraint from an expression and explicit row bounds.
    ///
    /// The expression's constant term is folded into the row bounds, so
    /// `x + 3` within `[lo, hi]` stores as `x` within `[lo - 3, hi - 3]`.
    pub fn add_expr_constraint(
        &mut self,
        expr: Expr,
        bounds: Bounds,
    ) -> Result<ConstraintId, ModelError> {
        let (terms, constant) = expr.into_parts();
        if !constant.is_finite() {
            return Err(ModelError::InvalidCoefficient {
                coefficient: constant,
            });
        }
        let bounds = Bounds::new(bounds.lower - constant, bounds.upper - constant);
        let constraint_id = self.add_constraint(Constraint { bounds })?;
        for (var_id, coeff) in self.normalize_terms(terms) {
            self.set_coefficient(var_id, constraint_id, coeff)?;
        }
        Ok(constraint_id)
    }

    /// Add a constraint from a comparison expression (e.g., `x + y <= 10`).
    pub fn add_constraint_expr(
        &mut self,
        constraint: ConstraintExpr,
    ) -> Result<ConstraintId, ModelError> {
        let (lower, upper) = constraint.row_interval();
        let (expr, _, _) = constraint.into_parts();
        self.add_expr_constraint(expr, Bounds::new(lower, upper))
    }

    /// Add a coefficient to the constraint matrix.
    ///
    /// Sets the value at the intersection of a variable column and
    /// constraint row, replacing any previous value for that cell.
    pub fn set_coefficient(
        &mut self,
        var_id: VariableId,
        constraint_id: ConstraintId,
        coefficient: f64,
    ) -> Result<(), ModelError> {
        if !coefficient.is_finite() {
            return Err(ModelError::InvalidCoefficient { coefficient });
        }
        self.ensure_variable_exists(var_id)?;
        self.ensure_constraint_exists(constraint_id)?;

        let column = self.columns.entry(var_id).or_default();
        match column.iter_mut().find(|(cid, _)| *cid == constraint_id) {
            Some(entry) => entry.1 = coefficient,
            None => column.push((constraint_id, coefficient)),
        }
        self.bump_revision();

        Ok(())
    }

    /// Declare one continuous variable per index key passing the predicate.
    ///
    /// Keys arrive in iterator order (use [`linopt_expr::index`] products
    /// for lexicographic tuples); only keys for which `predicate` holds
    /// get a variable, with bounds from `bounds_fn(key)`. The resulting
    /// [`VariableMap`] supports stable lookup by full key.
    pub fn add_variable_map<K, I, P, F>(
        &mut self,
        keys: I,
        predicate: P,
        bounds_fn: F,
    ) -> Result<VariableMap<K>, ModelError>
    where
        K: Ord + Clone,
        I: IntoIterator<Item = K>,
        P: Fn(&K) -> bool,
        F: Fn(&K) -> Bounds,
    {
        let mut map = VariableMap::new();
        for key in keys {
            if !predicate(&key) {
                continue;
            }
            let id = self.add_variable(Variable::continuous(bounds_fn(&key)))?;
            map.insert(key, id);
        }
        tracing::debug!(
            component = "model",
            operation = "add_variable_map",
            status = "success",
            num_variables = map.len(),
            "Declared indexed variable collection"
        );
        Ok(map)
    }
}
