//! Value records passed into and out of the revenue model.
//!
//! Every type here is a plain immutable value: callers build a fresh
//! [`Inputs`] on each control change and receive a fresh [`RevenueResult`].

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACTIVE_USERS, DEFAULT_AVG_BALANCE, DEFAULT_OPT_IN_RATE, FAST_PAYBACK_WEEKS,
};
use crate::error::{DomainError, ensure_non_negative};

/// The three business inputs a partner adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Monthly active users of the partner's wallet or app.
    pub active_users: u64,
    /// Average stablecoin balance per user, in dollars.
    pub avg_balance: f64,
    /// Percentage of users expected to opt into yield, in `[0, 100]`.
    pub opt_in_rate: f64,
}

impl Inputs {
    pub fn new(active_users: u64, avg_balance: f64, opt_in_rate: f64) -> Self {
        Self {
            active_users,
            avg_balance,
            opt_in_rate,
        }
    }

    /// Check the inputs against the domain the model is defined on.
    ///
    /// `avg_balance` must be finite and non-negative; `opt_in_rate` must be a
    /// finite percentage in `[0, 100]`.
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_non_negative("avg_balance", self.avg_balance)?;
        let rate = ensure_non_negative("opt_in_rate", self.opt_in_rate)?;
        if rate > 100.0 {
            return Err(DomainError::OutOfRange {
                field: "opt_in_rate",
                value: rate,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(())
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE_USERS, DEFAULT_AVG_BALANCE, DEFAULT_OPT_IN_RATE)
    }
}

/// A named yield assumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    /// Annual percentage yield, in percent.
    pub apy_pct: f64,
    /// Highlighted as the likeliest outcome.
    pub recommended: bool,
}

impl Scenario {
    pub const fn new(name: &'static str, apy_pct: f64, recommended: bool) -> Self {
        Self {
            name,
            apy_pct,
            recommended,
        }
    }
}

/// Partner revenue for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioRevenue {
    /// Total yield generated on the TVL over a year.
    pub annual_yield: f64,
    /// Partner share of the annual yield.
    pub annual_revenue: f64,
    pub monthly_revenue: f64,
}

/// A scenario paired with the revenue it produces for the current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    pub revenue: ScenarioRevenue,
}

/// Return on the integration cost for the reference scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub weekly_revenue: f64,
    /// Weeks until cumulative revenue covers the integration cost.
    /// `f64::INFINITY` when weekly revenue is zero.
    pub payback_weeks: f64,
    /// `(annual_revenue - cost) / annual_revenue * 100`, or `0` without revenue.
    pub first_year_profit_margin_pct: f64,
}

impl RoiMetrics {
    /// Whether payback happens in under [`FAST_PAYBACK_WEEKS`].
    pub fn is_fast_payback(&self) -> bool {
        self.payback_weeks < FAST_PAYBACK_WEEKS
    }
}

/// Everything derived from one set of [`Inputs`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueResult {
    pub inputs: Inputs,
    pub participating_users: u64,
    pub total_value_locked: f64,
    /// One entry per configured scenario, in configuration order.
    pub scenarios: Vec<ScenarioProjection>,
    pub integration_cost: f64,
    /// Scenario the ROI figures were computed against.
    pub reference_scenario: Scenario,
    pub roi: RoiMetrics,
}

impl RevenueResult {
    /// Look up the projection for a scenario by name.
    pub fn scenario(&self, name: &str) -> Option<&ScenarioProjection> {
        self.scenarios.iter().find(|p| p.scenario.name == name)
    }

    pub fn payback_weeks(&self) -> f64 {
        self.roi.payback_weeks
    }

    pub fn first_year_profit_margin_pct(&self) -> f64 {
        self.roi.first_year_profit_margin_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_match_initial_page_state() {
        let inputs = Inputs::default();
        assert_eq!(inputs.active_users, 50_000);
        assert_eq!(inputs.avg_balance, 100.0);
        assert_eq!(inputs.opt_in_rate, 20.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(Inputs::new(0, 0.0, 0.0).validate().is_ok());
        assert!(Inputs::new(10_000_000, 10_000.0, 100.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_balance() {
        let err = Inputs::new(1_000, -5.0, 20.0).validate().unwrap_err();
        assert_eq!(err.field(), Some("avg_balance"));
    }

    #[test]
    fn validate_rejects_rate_above_hundred() {
        let err = Inputs::new(1_000, 5.0, 100.5).validate().unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange { field: "opt_in_rate", .. }));
    }

    #[test]
    fn validate_rejects_nan_rate() {
        let err = Inputs::new(1_000, 5.0, f64::NAN).validate().unwrap_err();
        assert!(matches!(err, DomainError::NotFinite { field: "opt_in_rate", .. }));
    }

    #[test]
    fn fast_payback_threshold_is_strict() {
        let roi = |weeks| RoiMetrics {
            weekly_revenue: 1.0,
            payback_weeks: weeks,
            first_year_profit_margin_pct: 0.0,
        };
        assert!(roi(3.9).is_fast_payback());
        assert!(!roi(4.0).is_fast_payback());
        assert!(!roi(f64::INFINITY).is_fast_payback());
    }

    #[test]
    fn inputs_json_shape() {
        let json = serde_json::to_value(Inputs::default()).unwrap();
        assert_eq!(json["active_users"], 50_000);
        assert_eq!(json["avg_balance"], 100.0);
        assert_eq!(json["opt_in_rate"], 20.0);
    }
}
