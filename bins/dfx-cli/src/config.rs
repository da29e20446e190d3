//! CLI configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};
use dfx_model::ModelParams;

/// Directory for captured leads (default: `<data dir>/defindex`).
pub const ENV_LEADS_DIR: &str = "DFX_LEADS_DIR";
/// Partner revenue share override, in percent.
pub const ENV_PARTNER_SHARE_PCT: &str = "DFX_PARTNER_SHARE_PCT";
/// Integration cost override, in dollars.
pub const ENV_INTEGRATION_COST: &str = "DFX_INTEGRATION_COST";
/// Weeks-per-month override.
pub const ENV_WEEKS_PER_MONTH: &str = "DFX_WEEKS_PER_MONTH";

#[derive(Clone, Debug)]
pub struct Config {
    /// Directory the JSON lead store writes to.
    pub leads_dir: PathBuf,
    /// Revenue model constants, production values unless overridden.
    pub model: ModelParams,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let leads_dir = lookup(ENV_LEADS_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_leads_dir);

        let defaults = ModelParams::default();
        let model = ModelParams {
            partner_share_pct: parse_or(&lookup, ENV_PARTNER_SHARE_PCT, defaults.partner_share_pct)?,
            integration_cost: parse_or(&lookup, ENV_INTEGRATION_COST, defaults.integration_cost)?,
            weeks_per_month: parse_or(&lookup, ENV_WEEKS_PER_MONTH, defaults.weeks_per_month)?,
            ..defaults
        };
        model
            .validate()
            .context("invalid revenue model configuration")?;

        Ok(Config { leads_dir, model })
    }
}

fn default_leads_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("defindex")
}

fn parse_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> Result<f64> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.model, ModelParams::default());
        assert!(cfg.leads_dir.ends_with("defindex"), "{:?}", cfg.leads_dir);
    }

    #[test]
    fn leads_dir_override() {
        let cfg = Config::from_lookup(lookup(&[(ENV_LEADS_DIR, "/tmp/dfx-leads")])).unwrap();
        assert_eq!(cfg.leads_dir, PathBuf::from("/tmp/dfx-leads"));
    }

    #[test]
    fn model_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_PARTNER_SHARE_PCT, "5"),
            (ENV_INTEGRATION_COST, " 2500.5 "),
            (ENV_WEEKS_PER_MONTH, "4.345"),
        ]))
        .unwrap();
        assert_eq!(cfg.model.partner_share_pct, 5.0);
        assert_eq!(cfg.model.integration_cost, 2500.5);
        assert_eq!(cfg.model.weeks_per_month, 4.345);
        assert_eq!(cfg.model.reference_scenario, "Moderate");
    }

    #[test]
    fn unparsable_override_is_error() {
        let err = Config::from_lookup(lookup(&[(ENV_INTEGRATION_COST, "lots")])).unwrap_err();
        assert!(err.to_string().contains(ENV_INTEGRATION_COST));
    }

    #[test]
    fn out_of_domain_override_is_error() {
        assert!(Config::from_lookup(lookup(&[(ENV_WEEKS_PER_MONTH, "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[(ENV_PARTNER_SHARE_PCT, "-1")])).is_err());
    }
}
