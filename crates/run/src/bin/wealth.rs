//! Prints stationary wealth statistics and checks them by simulation.

use anyhow::{Context, Result};
use gemac_models::wealth::{
    Ar1Income, Ar1Return, IidIncome, IncomeProcess, SimulationConfig, gini, simulate,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 1234;

fn main() -> Result<()> {
    gemac_run::init_tracing();

    let iid = IidIncome::default();
    let ar1 = Ar1Income::default();
    let config = SimulationConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    println!("IID income:");
    println!("    E[a] = {:.5}", iid.wealth_mean());
    println!("    Var[a] = {:.5}", iid.wealth_var());
    let sim = simulate(&IncomeProcess::Iid(iid), &config, &mut rng);
    println!("    simulated E[a] = {:.5}", sim.mean_wealth());
    println!(
        "    Gini (income, wealth) = ({:.5}, {:.5})",
        gini(&sim.income).context("income Gini")?,
        gini(&sim.wealth).context("wealth Gini")?
    );

    println!("AR(1) income:");
    println!("    E[a] = {:.5}", ar1.wealth_mean());
    let sim = simulate(&IncomeProcess::Ar1(ar1), &config, &mut rng);
    println!("    simulated E[a] = {:.5}", sim.mean_wealth());
    println!(
        "    Gini (income, wealth) = ({:.5}, {:.5})",
        gini(&sim.income).context("income Gini")?,
        gini(&sim.wealth).context("wealth Gini")?
    );

    println!("AR(1) returns:");
    println!("    E[R] = {:.5}", Ar1Return::default().mean_gross_return());
    Ok(())
}
