//! One routine for every market-clearing problem.
//!
//! A [`MarketModel`] supplies a bracket for its price, the allocation both
//! sides of the market choose at a candidate price, the excess demand of
//! that allocation, and a constructor for the final equilibrium record.
//! [`solve`] bisects excess demand on the bracket and then rebuilds the
//! allocation once more at the root, so the record never mixes values from
//! different points of the search.

use std::{convert::Infallible, error::Error as StdError};

use gemac_core::{EquationProblem, Model, Observer};
use gemac_solvers::equation::bisection::{self, Action, Event, Status};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// An economy with a single market cleared by one price.
pub trait MarketModel {
    /// Choices of every agent at a candidate price.
    type Allocation;

    /// Record of the economy at its market-clearing price.
    type Equilibrium<'a>
    where
        Self: 'a;

    type Error: StdError + Send + Sync + 'static;

    /// Name used in logs, e.g. `"capital"`.
    const MARKET: &'static str;

    /// Price interval searched by [`solve`].
    const BRACKET: [f64; 2];

    /// Solves both sides of the market at `price`.
    ///
    /// # Errors
    ///
    /// Returns an error if a partial-equilibrium solver fails.
    fn allocate(&self, price: f64) -> Result<Self::Allocation, Self::Error>;

    /// Demand minus supply in the cleared market.
    fn excess_demand(&self, allocation: &Self::Allocation) -> f64;

    /// Builds the equilibrium record from the market-clearing price.
    fn equilibrium(&self, price: f64, allocation: Self::Allocation) -> Self::Equilibrium<'_>;
}

/// Failure to find or build an equilibrium.
#[derive(Debug, Error)]
pub enum EquilibriumError {
    #[error("price search failed")]
    Search(#[from] bisection::Error),

    #[error("market did not clear: excess demand {residual:e} at price {price} ({status:?})")]
    NotConverged {
        price: f64,
        residual: f64,
        status: Status,
    },

    #[error("allocation failed at the market-clearing price {price}")]
    Allocation {
        price: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Clears the market of `model` on [`MarketModel::BRACKET`].
///
/// # Errors
///
/// See [`solve_in`].
pub fn solve<'m, M: MarketModel>(
    model: &'m M,
    config: &bisection::Config,
) -> Result<M::Equilibrium<'m>, EquilibriumError> {
    solve_in(model, M::BRACKET, config)
}

/// Clears the market of `model` on a caller-supplied bracket.
///
/// # Errors
///
/// Returns [`EquilibriumError::Search`] if the bracket is invalid (including
/// no sign change in excess demand) or an evaluation fails, and
/// [`EquilibriumError::NotConverged`] if the search ends without converging.
pub fn solve_in<'m, M: MarketModel>(
    model: &'m M,
    bracket: [f64; 2],
    config: &bisection::Config,
) -> Result<M::Equilibrium<'m>, EquilibriumError> {
    let tracer = TraceSearch { market: M::MARKET };
    let solution = bisection::solve(
        &Market(model),
        &ExcessDemand(model),
        bracket,
        config,
        tracer,
    )
    .inspect_err(|err| warn!(market = M::MARKET, ?bracket, %err, "price search failed"))?;

    if solution.status != Status::Converged {
        warn!(
            market = M::MARKET,
            price = solution.x,
            residual = solution.residual,
            status = ?solution.status,
            "market did not clear"
        );
        return Err(EquilibriumError::NotConverged {
            price: solution.x,
            residual: solution.residual,
            status: solution.status,
        });
    }

    debug!(
        market = M::MARKET,
        price = solution.x,
        residual = solution.residual,
        iters = solution.iters,
        "market cleared"
    );

    let price = solution.x;
    let allocation = model
        .allocate(price)
        .map_err(|err| EquilibriumError::Allocation {
            price,
            source: Box::new(err),
        })?;
    Ok(model.equilibrium(price, allocation))
}

/// Adapts a [`MarketModel`] to the solver's [`Model`] trait.
struct Market<'m, M>(&'m M);

impl<M: MarketModel> Model for Market<'_, M> {
    type Input = f64;
    type Output = M::Allocation;
    type Error = M::Error;

    fn call(&self, price: &f64) -> Result<M::Allocation, M::Error> {
        self.0.allocate(*price)
    }
}

/// The clearing condition: excess demand equals zero.
struct ExcessDemand<'m, M>(&'m M);

impl<M: MarketModel> EquationProblem<1> for ExcessDemand<'_, M> {
    type Input = f64;
    type Output = M::Allocation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _price: &f64, allocation: &M::Allocation) -> Result<[f64; 1], Self::Error> {
        Ok([self.0.excess_demand(allocation)])
    }
}

/// Logs each price tried by the search.
struct TraceSearch {
    market: &'static str,
}

impl<'a, M, P> Observer<Event<'a, M, P>, Action> for TraceSearch
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'a, M, P>) -> Option<Action> {
        match event.residual() {
            Some(excess_demand) => trace!(
                market = self.market,
                price = event.x(),
                excess_demand,
                "evaluated price"
            ),
            None => debug!(market = self.market, price = event.x(), "evaluation failed"),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use gemac_solvers::equation::bisection::BracketError;

    /// Linear market: demand `3 - p`, supply `p`, cleared at `p = 1.5`.
    struct Linear;

    impl MarketModel for Linear {
        type Allocation = (f64, f64);
        type Equilibrium<'a> = f64;
        type Error = Infallible;

        const MARKET: &'static str = "linear";
        const BRACKET: [f64; 2] = [0.0, 3.0];

        fn allocate(&self, price: f64) -> Result<(f64, f64), Infallible> {
            Ok((3.0 - price, price))
        }

        fn excess_demand(&self, &(demand, supply): &(f64, f64)) -> f64 {
            demand - supply
        }

        fn equilibrium(&self, price: f64, _allocation: (f64, f64)) -> f64 {
            price
        }
    }

    #[test]
    fn clears_on_default_bracket() {
        let price = solve(&Linear, &bisection::Config::default()).unwrap();

        assert_relative_eq!(price, 1.5, epsilon = 1e-10);
    }

    #[test]
    fn bracket_without_sign_change_is_rejected() {
        let err = solve_in(&Linear, [2.0, 3.0], &bisection::Config::default()).unwrap_err();

        assert!(matches!(
            err,
            EquilibriumError::Search(bisection::Error::InvalidBracket(
                BracketError::NoSignChange { .. }
            ))
        ));
    }

    #[test]
    fn iteration_limit_is_not_an_equilibrium() {
        let config = bisection::Config::new(2, 0.0, 0.0, 0.0).unwrap();
        let err = solve_in(&Linear, [0.0, 2.9], &config).unwrap_err();

        match err {
            EquilibriumError::NotConverged { status, .. } => assert_eq!(status, Status::MaxIters),
            other => panic!("expected NotConverged, got {other:?}"),
        }
    }

    /// The linear market, but it can only be allocated a fixed number of times.
    struct Rationed {
        remaining: Cell<u32>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("no allocations left")]
    struct Exhausted;

    impl MarketModel for Rationed {
        type Allocation = (f64, f64);
        type Equilibrium<'a> = f64;
        type Error = Exhausted;

        const MARKET: &'static str = "rationed";
        const BRACKET: [f64; 2] = [0.0, 3.0];

        fn allocate(&self, price: f64) -> Result<(f64, f64), Exhausted> {
            let remaining = self.remaining.get().checked_sub(1).ok_or(Exhausted)?;
            self.remaining.set(remaining);
            Linear.allocate(price).map_err(|never| match never {})
        }

        fn excess_demand(&self, allocation: &(f64, f64)) -> f64 {
            Linear.excess_demand(allocation)
        }

        fn equilibrium(&self, price: f64, _allocation: (f64, f64)) -> f64 {
            price
        }
    }

    #[test]
    fn failure_to_reallocate_at_the_root_is_reported() {
        // Both endpoints and the exact midpoint root use up the three allocations.
        let model = Rationed {
            remaining: Cell::new(3),
        };
        let err = solve(&model, &bisection::Config::default()).unwrap_err();

        match err {
            EquilibriumError::Allocation { price, source } => {
                assert_relative_eq!(price, 1.5);
                assert_eq!(source.to_string(), "no allocations left");
            }
            other => panic!("expected Allocation, got {other:?}"),
        }
    }
}
