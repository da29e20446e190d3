//! Calculator constants. All monetary values are in US dollars.

use crate::types::Scenario;

/// Lower bound of the active-user slider.
pub const ACTIVE_USERS_MIN: u64 = 1_000;
/// Upper bound of the active-user slider.
pub const ACTIVE_USERS_MAX: u64 = 10_000_000;

/// Linear control domain covered by a slider, `[SLIDER_MIN, SLIDER_MAX]`.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 100.0;

/// Average balance presets offered by the balance picker.
///
/// The model itself accepts any non-negative balance.
pub const BALANCE_OPTIONS: [f64; 5] = [1.0, 10.0, 100.0, 1_000.0, 10_000.0];

/// Opt-in slider range and step, in percent.
pub const OPT_IN_RATE_MIN: f64 = 5.0;
pub const OPT_IN_RATE_MAX: f64 = 100.0;
pub const OPT_IN_RATE_STEP: f64 = 5.0;

/// Initial inputs shown before the user touches any control.
pub const DEFAULT_ACTIVE_USERS: u64 = 50_000;
pub const DEFAULT_AVG_BALANCE: f64 = 100.0;
pub const DEFAULT_OPT_IN_RATE: f64 = 20.0;

/// Share of generated yield retained by the integrating partner, in percent.
pub const PARTNER_SHARE_PCT: f64 = 4.0;

/// One-off integration cost (one week of dev/design/QA).
pub const INTEGRATION_COST: f64 = 4_000.0;

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Payback periods strictly below this many weeks are flagged as ultra-fast.
pub const FAST_PAYBACK_WEEKS: f64 = 4.0;

/// Projection scenarios, ordered by increasing APY.
///
/// # Examples
///
/// ```
/// use dfx_core::constants::SCENARIOS;
/// let apys: Vec<f64> = SCENARIOS.iter().map(|s| s.apy_pct).collect();
/// assert_eq!(apys, vec![8.0, 12.0, 18.0]);
/// ```
pub const SCENARIOS: [Scenario; 3] = [
    Scenario::new("Conservative", 8.0, false),
    Scenario::new("Moderate", 12.0, true),
    Scenario::new("Peak", 18.0, false),
];

/// Scenario that ROI figures are always evaluated against.
pub const REFERENCE_SCENARIO: &str = "Moderate";

/// Local storage collection that captured leads are appended to.
pub const LEADS_COLLECTION: &str = "defindex_leads";

/// Duration of a displayed-number transition, in milliseconds.
pub const TWEEN_DURATION_MS: u64 = 500;
/// Number of frames in a displayed-number transition.
pub const TWEEN_STEPS: u32 = 30;
