//! Linopt core model builder.

pub mod model;
pub mod types;

pub use model::{Model, ModelError, VariableMap};
pub use types::{Bounds, Constraint, Objective, Sense, Variable};
