//! # dfx-model: Scale mapping and revenue projection.
//!
//! Everything here is a pure function of its arguments:
//! - **Scale mapper**: a linear slider position in `[0, 100]` maps onto a
//!   logarithmic value range, so one control spans 1,000 to 10,000,000 users.
//! - **Revenue model**: participation, total value locked, partner revenue for
//!   each yield scenario, and ROI against the reference (Moderate) scenario.
//! - **Formatting** and **tweening** helpers for presenting the figures.

pub mod format;
pub mod revenue;
pub mod scale;
pub mod tween;

pub use revenue::{
    ModelParams, RevenueModel, compute_participation, compute_revenue, compute_roi,
    compute_scenario_revenue, compute_tvl,
};
pub use scale::LogScale;
pub use tween::Tween;
