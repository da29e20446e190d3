//! Trait interfaces for the calculator.
//!
//! - [`ValueScale`]: slider position to value mapping (dfx-model implements)
//! - [`RevenueCalculator`]: inputs to revenue projections (dfx-model implements)

use crate::error::DomainError;
use crate::types::{Inputs, RevenueResult};

/// Bijective mapping between a linear control position and a value domain.
///
/// Positions live in `[SLIDER_MIN, SLIDER_MAX]`
/// (see [`crate::constants`]).
pub trait ValueScale: Send + Sync {
    /// Value shown for a control position.
    fn to_value(&self, position: f64) -> f64;

    /// Control position for a value. The inverse of [`to_value`](Self::to_value)
    /// up to rounding.
    fn to_position(&self, value: f64) -> f64;
}

/// Pure computation of revenue projections from the three business inputs.
pub trait RevenueCalculator: Send + Sync {
    /// Recompute every derived figure for `inputs`.
    ///
    /// Fails only when `inputs` lie outside the model's domain; division by
    /// zero inside the ROI figures is reported through sentinel values.
    fn compute_revenue(&self, inputs: &Inputs) -> Result<RevenueResult, DomainError>;
}
