use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur during golden section search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bracket [{left}, {right}] must be finite with positive width")]
    InvalidBracket { left: f64, right: f64 },

    #[error("objective is NaN at x = {x}")]
    NanObjective { x: f64 },

    #[error("objective still improving at x = {upper} after {doublings} doublings from {lower}")]
    ExpansionFailed {
        lower: f64,
        upper: f64,
        doublings: usize,
    },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
