//! Solves the OLG economy with default parameters and prints the equilibrium.

use anyhow::{Context, Result};
use gemac_models::olg::{self, Parameters};
use tracing::info;

fn main() -> Result<()> {
    gemac_run::init_tracing();

    let params = Parameters::default();
    info!(?params, "solving OLG economy");

    let eq = olg::solve(&params).context("OLG equilibrium")?;
    println!("{eq}");
    Ok(())
}
