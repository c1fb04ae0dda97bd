pub mod expr;
pub mod ids;
pub mod index;

pub use expr::{sum_over, ComparisonSense, ConstraintExpr, Expr, LinearExprError};
pub use ids::{ConstraintId, VariableId};
