//! Builder functions for constructing linear expressions over index keys.

use crate::expr::core::Expr;
use crate::expr::error::LinearExprError;
use crate::ids::VariableId;

/// Sum `term_fn(key)` over every key satisfying `predicate`.
///
/// The key set may be any iterator, typically a cartesian product from
/// [`crate::index`]. An empty or fully filtered key set yields the zero
/// expression. A variable referenced from several keys' terms accumulates
/// into a single coefficient entry keyed by variable identity.
pub fn sum_over<K, I, P, F>(keys: I, predicate: P, term_fn: F) -> Expr
where
    I: IntoIterator<Item = K>,
    P: Fn(&K) -> bool,
    F: Fn(&K) -> Expr,
{
    let mut sum = Expr::zero();
    for key in keys {
        if !predicate(&key) {
            continue;
        }
        sum = sum.add(&term_fn(&key));
    }
    sum
}

/// Combine multiple expressions into one, merging coefficients.
pub fn linear_sum(exprs: impl IntoIterator<Item = Expr>) -> Expr {
    let mut sum = Expr::zero();
    for expr in exprs {
        sum = sum.add(&expr);
    }
    sum
}

/// Build an Expr by zipping separate variable and coefficient vecs.
///
/// Returns an error if the lengths differ or a coefficient is non-finite.
pub fn zip_terms(
    variables: Vec<VariableId>,
    coefficients: Vec<f64>,
) -> Result<Expr, LinearExprError> {
    if variables.len() != coefficients.len() {
        return Err(LinearExprError::MismatchedLengths);
    }
    if let Some(&coefficient) = coefficients.iter().find(|c| !c.is_finite()) {
        return Err(LinearExprError::NonFiniteCoefficient { coefficient });
    }
    Ok(Expr::from_terms(
        variables.into_iter().zip(coefficients),
    ))
}
