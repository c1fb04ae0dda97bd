//! Core linear expression type.
//!
//! Terms live in a canonical `BTreeMap<VariableId, f64>`, so a variable
//! referenced from several places always accumulates into one coefficient
//! entry. The symbolic coefficient mapping is therefore independent of
//! construction order; floating-point rounding across orderings is not.

use crate::expr::constraint::{ComparisonSense, ConstraintExpr};
use crate::ids::VariableId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    constant: f64,
    terms: BTreeMap<VariableId, f64>,
}

impl Expr {
    // ── Constructors ────────────────────────────────────────

    /// The zero expression (no terms, zero constant).
    pub fn zero() -> Self {
        Self::default()
    }

    /// Just a constant, no variable terms.
    pub fn constant(constant: f64) -> Self {
        Self {
            constant,
            ..Default::default()
        }
    }

    /// Single linear term: coeff * var.
    pub fn term(var_id: VariableId, coeff: f64) -> Self {
        let mut expr = Self::default();
        expr.accumulate(var_id, coeff);
        expr
    }

    /// Single variable with coefficient 1.0.
    pub fn var(var_id: VariableId) -> Self {
        Self::term(var_id, 1.0)
    }

    /// From raw (variable, coefficient) pairs; duplicates accumulate.
    pub fn from_terms(terms: impl IntoIterator<Item = (VariableId, f64)>) -> Self {
        let mut expr = Self::default();
        for (var_id, coeff) in terms {
            expr.accumulate(var_id, coeff);
        }
        expr
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn constant_term(&self) -> f64 {
        self.constant
    }

    /// Iterate terms in variable-ID order.
    pub fn terms(&self) -> impl Iterator<Item = (VariableId, f64)> + '_ {
        self.terms.iter().map(|(&v, &c)| (v, c))
    }

    /// Number of variables with a nonzero coefficient.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty() && self.constant == 0.0
    }

    /// Coefficient of a variable (0.0 when absent).
    pub fn coefficient(&self, var_id: VariableId) -> f64 {
        self.terms.get(&var_id).copied().unwrap_or(0.0)
    }

    /// Consume and return linear terms in variable-ID order.
    pub fn into_terms(self) -> Vec<(VariableId, f64)> {
        self.terms.into_iter().collect()
    }

    /// Consume and return (terms, constant).
    pub fn into_parts(self) -> (Vec<(VariableId, f64)>, f64) {
        let constant = self.constant;
        (self.terms.into_iter().collect(), constant)
    }

    // ── Operations ──────────────────────────────────────────

    fn accumulate(&mut self, var_id: VariableId, coeff: f64) {
        let entry = self.terms.entry(var_id).or_insert(0.0);
        *entry += coeff;
        if *entry == 0.0 {
            self.terms.remove(&var_id);
        }
    }

    /// Scale all terms and the constant by a factor.
    pub fn scale(&self, by: f64) -> Self {
        if by == 0.0 {
            return Self::zero();
        }
        Self {
            constant: self.constant * by,
            terms: self.terms.iter().map(|(&v, &c)| (v, c * by)).collect(),
        }
    }

    /// Add another expression, merging coefficients by variable identity.
    pub fn add(&self, other: &Expr) -> Self {
        let mut out = self.clone();
        out.constant += other.constant;
        for (&var_id, &coeff) in &other.terms {
            out.accumulate(var_id, coeff);
        }
        out
    }

    /// Add a constant offset.
    pub fn add_constant(&self, value: f64) -> Self {
        Self {
            constant: self.constant + value,
            terms: self.terms.clone(),
        }
    }

    /// Copy with constant set to zero.
    pub fn without_constant(&self) -> Self {
        Self {
            constant: 0.0,
            terms: self.terms.clone(),
        }
    }

    // ── Comparison methods (produce ConstraintExpr) ─────────

    pub fn compare_scalar(&self, rhs: f64, sense: ComparisonSense) -> ConstraintExpr {
        ConstraintExpr::new(self.without_constant(), sense, rhs - self.constant)
    }

    pub fn compare_expr(&self, other: &Expr, sense: ComparisonSense) -> ConstraintExpr {
        let combined = self.add(&other.scale(-1.0));
        ConstraintExpr::new(combined.without_constant(), sense, -combined.constant)
    }

    pub fn le(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::LessEqual)
    }

    pub fn ge(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::GreaterEqual)
    }

    pub fn eq(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::Equal)
    }

    pub fn le_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::LessEqual)
    }

    pub fn ge_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::GreaterEqual)
    }

    pub fn eq_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::Equal)
    }
}

// ── Operator overloads ──────────────────────────────────────

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Self::Output {
        Expr::add(&self, &rhs)
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Self::Output {
        Expr::add(&self, &rhs.scale(-1.0))
    }
}

impl std::ops::Mul<f64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::expr::{ComparisonSense, Expr};
    use crate::VariableId;

    fn x() -> VariableId {
        VariableId::new(1)
    }

    fn y() -> VariableId {
        VariableId::new(2)
    }

    #[test]
    fn zero_is_empty() {
        let e = Expr::zero();
        assert!(e.is_zero());
        assert_eq!(e.num_terms(), 0);
        assert_eq!(e.constant_term(), 0.0);
    }

    #[test]
    fn constant_only() {
        let e = Expr::constant(5.0);
        assert_eq!(e.constant_term(), 5.0);
        assert_eq!(e.num_terms(), 0);
    }

    #[test]
    fn add_constant() {
        let e = Expr::var(x()).add_constant(3.0);
        assert_eq!(e.constant_term(), 3.0);
        assert_eq!(e.num_terms(), 1);
    }

    #[test]
    fn scale_with_constant() {
        let e = Expr::term(x(), 2.0).add_constant(3.0);
        let scaled = e.scale(2.0);
        assert_eq!(scaled.constant_term(), 6.0);
        assert_eq!(scaled.coefficient(x()), 4.0);
    }

    #[test]
    fn add_exprs_with_constants() {
        let a = Expr::term(x(), 1.0).add_constant(3.0);
        let b = Expr::term(y(), 2.0).add_constant(7.0);
        let c = a.add(&b);
        assert_eq!(c.constant_term(), 10.0);
        assert_eq!(c.num_terms(), 2);
    }

    #[test]
    fn duplicate_terms_accumulate() {
        let e = Expr::from_terms(vec![(x(), 2.0), (x(), 3.0), (y(), 1.0)]);
        assert_eq!(e.num_terms(), 2);
        assert_eq!(e.coefficient(x()), 5.0);
    }

    #[test]
    fn cancelling_terms_drop_out() {
        let e = Expr::term(x(), 2.0).add(&Expr::term(x(), -2.0));
        assert!(e.is_zero());
        assert_eq!(e.coefficient(x()), 0.0);
    }

    #[test]
    fn construction_order_does_not_matter() {
        let forward = Expr::term(x(), 1.0)
            .add(&Expr::term(y(), 2.0))
            .add(&Expr::term(x(), 3.0));
        let backward = Expr::term(x(), 3.0)
            .add(&Expr::term(x(), 1.0))
            .add(&Expr::term(y(), 2.0));
        assert_eq!(forward, backward);
    }

    #[test]
    fn le_folds_constant_into_rhs() {
        let e = Expr::term(x(), 1.0).add_constant(3.0);
        let c = e.le(10.0);
        assert_eq!(c.sense(), ComparisonSense::LessEqual);
        assert_eq!(c.rhs(), 7.0); // 10.0 - 3.0
        assert_eq!(c.expr().constant_term(), 0.0);
    }

    #[test]
    fn ge_expr_moves_rhs_terms_left() {
        let lhs = Expr::term(x(), 1.0).add_constant(3.0);
        let rhs = Expr::term(y(), 1.0).add_constant(7.0);
        let c = lhs.ge_expr(&rhs);
        assert_eq!(c.sense(), ComparisonSense::GreaterEqual);
        assert_eq!(c.rhs(), 4.0); // 7.0 - 3.0
        assert_eq!(c.expr().num_terms(), 2);
        assert_eq!(c.expr().coefficient(y()), -1.0);
    }

    #[test]
    fn eq_scalar() {
        let e = Expr::var(x());
        let c = e.eq(5.0);
        assert_eq!(c.sense(), ComparisonSense::Equal);
        assert_eq!(c.rhs(), 5.0);
    }

    #[test]
    fn operator_overloads() {
        let e = Expr::var(x()) * 2.0 + Expr::var(y()) - Expr::term(x(), 0.5);
        assert_eq!(e.coefficient(x()), 1.5);
        assert_eq!(e.coefficient(y()), 1.0);

        let n = -e;
        assert_eq!(n.coefficient(x()), -1.5);
    }
}
