//! Expression types for optimization modeling.
//!
//! - `core`       — Expr: canonical coefficient map + constant
//! - `constraint` — ConstraintExpr: expression with comparison sense and RHS
//! - `builders`   — summation helpers over index keys
//! - `error`      — Expression construction errors

pub mod builders;
pub mod constraint;
pub mod core;
pub mod error;

pub use builders::{linear_sum, sum_over, zip_terms};
pub use constraint::{ComparisonSense, ConstraintExpr};
pub use core::Expr;
pub use error::LinearExprError;
