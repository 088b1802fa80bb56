use approx::assert_relative_eq;
use gemac_core::constraint::ConstraintError;
use gemac_models::{
    labor::{self, Parameters, Preferences, analytical_hours},
    market::MarketModel,
};

#[test]
fn default_economy_clears_the_labor_market() {
    let params = Parameters::default();
    let eq = labor::solve(&params).expect("default economy has an equilibrium");

    assert!(eq.w > 0.1 && eq.w < 1.0);
    assert!(eq.labor_market_residual().abs() < 1e-6);
    assert!(eq.goods_market_residual().abs() < 1e-6);

    let at_root = params.allocate(eq.w).unwrap();
    assert!(params.excess_demand(&at_root).abs() < 1e-6);
}

#[test]
fn numerical_hours_match_closed_form() {
    let params = Parameters::default();
    let eq = labor::solve(&params).unwrap();

    assert_relative_eq!(eq.h, analytical_hours(&params), epsilon = 1e-6);
}

#[test]
fn budget_constraint_holds_exactly() {
    let params = Parameters::new(0.3, 1.1, 1.5, 0.8, 0.7).unwrap();
    let eq = labor::solve(&params).unwrap();

    assert_relative_eq!(eq.c, eq.w * eq.h + eq.profit, max_relative = 1e-14);
    assert_relative_eq!(eq.h, analytical_hours(&params), epsilon = 1e-6);
}

#[test]
fn log_utility_is_the_crra_limit() {
    let log = Parameters::new(0.36, 1.0, 1.0, 1.0, 0.5).unwrap();
    let near = Parameters::new(0.36, 1.0, 1.0 + 1e-6, 1.0, 0.5).unwrap();

    let eq_log = labor::solve(&log).unwrap();
    let eq_near = labor::solve(&near).unwrap();

    assert_relative_eq!(eq_log.w, eq_near.w, epsilon = 1e-5);
    assert_relative_eq!(eq_log.h, eq_near.h, epsilon = 1e-5);
    assert_relative_eq!(eq_log.h, analytical_hours(&log), epsilon = 1e-6);
}

#[test]
fn solving_twice_gives_identical_records() {
    let params = Parameters::default();

    assert_eq!(labor::solve(&params).unwrap(), labor::solve(&params).unwrap());
}

#[test]
fn rejects_invalid_parameters() {
    assert_eq!(Parameters::new(0.36, 1.0, 2.0, 1.0, 0.0).unwrap_err().field, "psi");
    assert_eq!(Parameters::new(0.36, -1.0, 2.0, 1.0, 0.5).unwrap_err().field, "z");
    assert_eq!(Parameters::new(0.36, 1.0, 2.0, f64::NAN, 0.5).unwrap_err().field, "theta");
}

#[test]
fn rejects_infinite_preferences_at_construction() {
    let err = Parameters::new(0.36, 1.0, f64::INFINITY, 1.0, 0.5).unwrap_err();
    assert_eq!(err.field, "gamma");
    assert_eq!(err.source, ConstraintError::NotFinite);

    let err = Preferences::new(2.0, 1.0, f64::INFINITY).unwrap_err();
    assert_eq!(err.field, "psi");
    assert_eq!(err.source, ConstraintError::NotFinite);
}
