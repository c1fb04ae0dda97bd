//! Bridge from linopt models to the microlp solver.
//!
//! This crate translates a `linopt_core::Model` into a `microlp::Problem`,
//! runs the solve, and maps the outcome back into a solver-agnostic
//! `linopt_solver::SolveResult`.

pub mod solver;

pub use solver::Solver;
