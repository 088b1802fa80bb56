//! Core traits and types for small general-equilibrium models.
//!
//! This crate defines the shared abstractions that solvers and economic
//! models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`], [`OptimizationProblem`]: problem traits that adapt
//!   solver variables to model inputs and extract residuals or objectives from
//!   outputs
//! - [`constraint`]: numeric newtypes validated at construction, used to keep
//!   model parameters inside their economic domain

pub mod constraint;

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{EquationProblem, OptimizationProblem};
pub use {model::Model, model::Snapshot};
