//! Solvers for optimization problems: minimizing or maximizing an objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective.
//!
//! # Solvers
//!
//! - [`golden_section`]: derivative-free search for unimodal functions, over
//!   a bracketed interval or a half-line with an expanding upper bound
//!
//! [`OptimizationProblem`]: gemac_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod golden_section;
