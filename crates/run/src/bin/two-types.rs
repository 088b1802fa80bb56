//! Solves the labor-supply economy with two household types.

use anyhow::{Context, Result};
use gemac_models::labor::two_types::{self, Parameters};
use tracing::info;

fn main() -> Result<()> {
    gemac_run::init_tracing();

    let params = Parameters::default();
    info!(?params, "solving two-type economy");

    let eq = two_types::solve(&params).context("two-type equilibrium")?;
    println!("{eq}");
    Ok(())
}
