//! Revenue model implementing the [`RevenueCalculator`] trait.
//!
//! Maps the three business inputs to participation, total value locked,
//! per-scenario partner revenue, and ROI against the reference scenario:
//!
//! - `participating = round(active_users * opt_in_rate / 100)`
//! - `tvl = participating * avg_balance`
//! - `annual_revenue = tvl * apy / 100 * partner_share / 100`
//! - `payback_weeks = integration_cost / (annual_revenue / 12 / weeks_per_month)`
//!
//! Every function here is pure; zero-revenue cases resolve to sentinel values
//! rather than errors.

use dfx_core::constants::{
    INTEGRATION_COST, MONTHS_PER_YEAR, PARTNER_SHARE_PCT, REFERENCE_SCENARIO, SCENARIOS,
    WEEKS_PER_MONTH,
};
use dfx_core::error::{DomainError, ensure_non_negative, ensure_positive};
use dfx_core::traits::RevenueCalculator;
use dfx_core::types::{
    Inputs, RevenueResult, RoiMetrics, Scenario, ScenarioProjection, ScenarioRevenue,
};
use tracing::debug;

/// Number of users who opt into the yield feature.
pub fn compute_participation(active_users: u64, opt_in_rate: f64) -> u64 {
    (active_users as f64 * opt_in_rate / 100.0).round() as u64
}

/// Total value locked across participating users. Not rounded.
pub fn compute_tvl(participating_users: u64, avg_balance: f64) -> f64 {
    participating_users as f64 * avg_balance
}

/// Partner revenue generated by `tvl` earning `apy_pct`.
pub fn compute_scenario_revenue(tvl: f64, apy_pct: f64, partner_share_pct: f64) -> ScenarioRevenue {
    let annual_yield = tvl * apy_pct / 100.0;
    let annual_revenue = annual_yield * partner_share_pct / 100.0;
    ScenarioRevenue {
        annual_yield,
        annual_revenue,
        monthly_revenue: annual_revenue / MONTHS_PER_YEAR,
    }
}

/// Payback period and first-year margin for a one-off `integration_cost`.
///
/// Payback is `f64::INFINITY` without weekly revenue; the margin is `0`
/// without annual revenue.
pub fn compute_roi(revenue: &ScenarioRevenue, integration_cost: f64, weeks_per_month: f64) -> RoiMetrics {
    let weekly_revenue = revenue.monthly_revenue / weeks_per_month;
    let payback_weeks = if weekly_revenue > 0.0 {
        integration_cost / weekly_revenue
    } else {
        f64::INFINITY
    };
    let first_year_profit_margin_pct = if revenue.annual_revenue > 0.0 {
        (revenue.annual_revenue - integration_cost) / revenue.annual_revenue * 100.0
    } else {
        0.0
    };
    RoiMetrics {
        weekly_revenue,
        payback_weeks,
        first_year_profit_margin_pct,
    }
}

/// Tunable constants of the model.
///
/// [`Default`] yields the production values; tests and the CLI override
/// individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    /// Partner share of generated yield, in percent.
    pub partner_share_pct: f64,
    /// One-off integration cost in dollars.
    pub integration_cost: f64,
    pub weeks_per_month: f64,
    /// Scenarios evaluated on every recomputation, in display order.
    pub scenarios: Vec<Scenario>,
    /// Name of the scenario ROI is computed against.
    pub reference_scenario: &'static str,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            partner_share_pct: PARTNER_SHARE_PCT,
            integration_cost: INTEGRATION_COST,
            weeks_per_month: WEEKS_PER_MONTH,
            scenarios: SCENARIOS.to_vec(),
            reference_scenario: REFERENCE_SCENARIO,
        }
    }
}

impl ModelParams {
    /// Check every constant and return the reference scenario.
    pub fn validate(&self) -> Result<Scenario, DomainError> {
        let share = ensure_non_negative("partner_share_pct", self.partner_share_pct)?;
        if share > 100.0 {
            return Err(DomainError::OutOfRange {
                field: "partner_share_pct",
                value: share,
                min: 0.0,
                max: 100.0,
            });
        }
        ensure_non_negative("integration_cost", self.integration_cost)?;
        ensure_positive("weeks_per_month", self.weeks_per_month)?;
        if self.scenarios.is_empty() {
            return Err(DomainError::NoScenarios);
        }
        for scenario in &self.scenarios {
            ensure_non_negative("apy_pct", scenario.apy_pct)?;
        }
        self.scenarios
            .iter()
            .find(|s| s.name == self.reference_scenario)
            .copied()
            .ok_or_else(|| DomainError::UnknownScenario(self.reference_scenario.to_string()))
    }
}

/// The production revenue calculator.
#[derive(Debug, Clone)]
pub struct RevenueModel {
    params: ModelParams,
    reference: Scenario,
}

impl RevenueModel {
    /// Create a model with the production constants.
    pub fn new() -> Self {
        // SCENARIOS[1] is REFERENCE_SCENARIO.
        Self {
            params: ModelParams::default(),
            reference: SCENARIOS[1],
        }
    }

    /// Create a model with overridden constants.
    pub fn with_params(params: ModelParams) -> Result<Self, DomainError> {
        let reference = params.validate()?;
        Ok(Self { params, reference })
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// The scenario ROI figures are computed against.
    pub fn reference_scenario(&self) -> Scenario {
        self.reference
    }
}

impl Default for RevenueModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RevenueCalculator for RevenueModel {
    fn compute_revenue(&self, inputs: &Inputs) -> Result<RevenueResult, DomainError> {
        inputs.validate()?;

        let participating_users = compute_participation(inputs.active_users, inputs.opt_in_rate);
        let total_value_locked = compute_tvl(participating_users, inputs.avg_balance);

        let scenarios: Vec<ScenarioProjection> = self
            .params
            .scenarios
            .iter()
            .map(|&scenario| ScenarioProjection {
                scenario,
                revenue: compute_scenario_revenue(
                    total_value_locked,
                    scenario.apy_pct,
                    self.params.partner_share_pct,
                ),
            })
            .collect();

        let reference_revenue = compute_scenario_revenue(
            total_value_locked,
            self.reference.apy_pct,
            self.params.partner_share_pct,
        );
        let roi = compute_roi(
            &reference_revenue,
            self.params.integration_cost,
            self.params.weeks_per_month,
        );

        debug!(
            active_users = inputs.active_users,
            avg_balance = inputs.avg_balance,
            opt_in_rate = inputs.opt_in_rate,
            participating_users,
            total_value_locked,
            payback_weeks = roi.payback_weeks,
            "revenue recomputed"
        );

        Ok(RevenueResult {
            inputs: *inputs,
            participating_users,
            total_value_locked,
            scenarios,
            integration_cost: self.params.integration_cost,
            reference_scenario: self.reference,
            roi,
        })
    }
}

/// Recompute every derived figure with the production constants.
pub fn compute_revenue(inputs: &Inputs) -> Result<RevenueResult, DomainError> {
    RevenueModel::new().compute_revenue(inputs)
}
