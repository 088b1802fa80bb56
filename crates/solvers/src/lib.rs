//! Numerical solvers for general-equilibrium models.
//!
//! - [`equation`]: root-finding on [`EquationProblem`]s, used to clear markets
//! - [`optimization`]: scalar optimization on [`OptimizationProblem`]s, used
//!   for household choices that have no closed form
//!
//! Every solver works against the [`Model`] trait and reports progress to an
//! [`Observer`], so callers can trace or stop a search without the solver
//! knowing anything about economics.
//!
//! [`EquationProblem`]: gemac_core::EquationProblem
//! [`OptimizationProblem`]: gemac_core::OptimizationProblem
//! [`Model`]: gemac_core::Model
//! [`Observer`]: gemac_core::Observer

pub mod equation;
pub mod optimization;
