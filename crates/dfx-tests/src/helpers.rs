//! Shared test helpers for E2E and property tests.

use chrono::{DateTime, TimeZone, Utc};
use dfx_core::types::Inputs;
use dfx_leads::LeadForm;
use dfx_model::LogScale;

/// The page's initial state: 50,000 users, $100 balance, 20% opt-in.
pub fn page_inputs() -> Inputs {
    Inputs::default()
}

/// Inputs as the page would build them from raw control positions.
///
/// `users_position` is the log slider position in `[0, 100]`.
pub fn inputs_from_controls(users_position: f64, avg_balance: f64, opt_in_rate: f64) -> Inputs {
    let active_users = LogScale::ACTIVE_USERS.linear_to_count(users_position);
    Inputs::new(active_users, avg_balance, opt_in_rate)
}

/// A form that passes validation, distinguished by `name`.
pub fn valid_form(name: &str) -> LeadForm {
    let slug: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    LeadForm {
        name: name.to_string(),
        email: format!("{slug}@wallet.example"),
        company: "Acme Wallet".to_string(),
        telegram: String::new(),
    }
}

/// Fixed timestamp `minute` minutes after a reference instant.
pub fn ts(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, minute, 0).unwrap()
}

/// Assert `a` and `b` differ by at most `tol`.
#[track_caller]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {b} +/- {tol}, got {a}");
}
