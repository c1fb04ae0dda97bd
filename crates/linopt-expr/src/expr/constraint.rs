//! Comparison expressions produced by [`Expr::le`]/[`ge`]/[`eq`].
//!
//! A `ConstraintExpr` is the staged form of a constraint: the left side
//! with its constant already folded into the RHS, plus the comparison
//! sense. [`ConstraintExpr::row_interval`] turns the comparison into the
//! `(lower, upper)` row bounds that model storage uses.
//!
//! [`Expr::le`]: crate::Expr::le
//! [`ge`]: crate::Expr::ge
//! [`eq`]: crate::Expr::eq

use crate::expr::core::Expr;

/// Direction of a comparison constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl ComparisonSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "le",
            ComparisonSense::GreaterEqual => "ge",
            ComparisonSense::Equal => "eq",
        }
    }
}

impl std::fmt::Display for ComparisonSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A linear expression compared against a scalar RHS.
#[derive(Debug, Clone)]
pub struct ConstraintExpr {
    expr: Expr,
    sense: ComparisonSense,
    rhs: f64,
}

impl ConstraintExpr {
    pub fn new(expr: Expr, sense: ComparisonSense, rhs: f64) -> Self {
        Self { expr, sense, rhs }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn sense(&self) -> ComparisonSense {
        self.sense
    }

    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// The `(lower, upper)` row interval this comparison implies.
    ///
    /// One-sided comparisons leave the other side infinite; equality
    /// pins both sides to the RHS.
    pub fn row_interval(&self) -> (f64, f64) {
        match self.sense {
            ComparisonSense::LessEqual => (f64::NEG_INFINITY, self.rhs),
            ComparisonSense::GreaterEqual => (self.rhs, f64::INFINITY),
            ComparisonSense::Equal => (self.rhs, self.rhs),
        }
    }

    pub fn into_parts(self) -> (Expr, ComparisonSense, f64) {
        (self.expr, self.sense, self.rhs)
    }
}
