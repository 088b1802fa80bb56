//! Solves the labor-supply economy and compares it with the closed form.

use anyhow::{Context, Result};
use gemac_models::labor::{self, Parameters, analytical_hours};
use tracing::{debug, info};

fn main() -> Result<()> {
    gemac_run::init_tracing();

    let params = Parameters::default();
    info!(?params, "solving labor-supply economy");

    let eq = labor::solve(&params).context("labor-supply equilibrium")?;
    println!("{eq}");

    let h = analytical_hours(&params);
    println!("Analytical solution: h = L = {h:.5}");
    debug!(difference = eq.h - h, "numerical minus analytical hours");
    Ok(())
}
