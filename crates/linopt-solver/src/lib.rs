//! Shared solver abstractions for linopt.
//!
//! This crate provides the common types that solver backends (like
//! `linopt-microlp`) use to integrate with the linopt ecosystem.
//!
//! # Overview
//!
//! - [`SolverConfig`]: Configuration options for solver behavior
//! - [`SolverStatus`]: Terminal classification of a solve attempt
//! - [`SolverError`]: Errors raised before/around a solve attempt
//! - [`SolveResult`]: Status plus value assignment from one solve
//! - [`ResultError`]: Misuse of result accessors
//! - [`Solve`]: Trait for solver implementations

mod config;
mod error;
mod result;
mod status;
mod traits;

pub use config::SolverConfig;
pub use error::SolverError;
pub use result::{ResultError, SolveResult};
pub use status::SolverStatus;
pub use traits::Solve;
