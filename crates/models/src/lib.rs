//! Small general-equilibrium models used in computational macroeconomics.
//!
//! Each economy follows the same path: validated [`Parameters`] feed
//! partial-equilibrium solvers for firms and households, their choices at a
//! candidate price give an excess demand, and [`market::solve`] finds the
//! price that clears the market before rebuilding the whole allocation into
//! an immutable equilibrium record.
//!
//! - [`olg`]: two-period overlapping generations, clearing the capital market
//! - [`labor`]: a representative household choosing hours, clearing the
//!   labor market; [`labor::two_types`] splits it into two household types
//! - [`wealth`]: stationary wealth statistics under income risk
//!
//! [`Parameters`]: olg::Parameters

pub mod firm;
pub mod labor;
pub mod market;
pub mod olg;
pub mod utility;
pub mod wealth;

mod parameter;

pub use parameter::ParameterError;
