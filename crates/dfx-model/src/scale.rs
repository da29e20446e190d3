//! Logarithmic slider scale.
//!
//! Maps a linear control position in `[0, 100]` onto a value range
//! `[min_value, max_value]` so that equal slider movement produces an equal
//! *multiplicative* change in value. One slider then covers thousands to
//! tens of millions with even perceived granularity.
//!
//! `value = 10^(log10(min) + position * (log10(max) - log10(min)) / 100)`

use dfx_core::constants::{ACTIVE_USERS_MAX, ACTIVE_USERS_MIN, SLIDER_MAX, SLIDER_MIN};
use dfx_core::error::{DomainError, ensure_finite, ensure_positive};
use dfx_core::traits::ValueScale;

/// A logarithmic scale over `[min_value, max_value]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    min_value: f64,
    max_value: f64,
}

impl LogScale {
    /// The active-user slider: 1,000 to 10,000,000.
    pub const ACTIVE_USERS: LogScale = LogScale {
        min_value: ACTIVE_USERS_MIN as f64,
        max_value: ACTIVE_USERS_MAX as f64,
    };

    /// Create a scale. Both bounds must be finite and positive with `min < max`.
    pub fn new(min_value: f64, max_value: f64) -> Result<Self, DomainError> {
        ensure_positive("min_value", min_value)?;
        ensure_positive("max_value", max_value)?;
        if min_value >= max_value {
            return Err(DomainError::InvalidBounds {
                min: min_value,
                max: max_value,
            });
        }
        Ok(Self {
            min_value,
            max_value,
        })
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// log10 span covered by one unit of slider position.
    fn log_step(&self) -> f64 {
        (self.max_value.log10() - self.min_value.log10()) / (SLIDER_MAX - SLIDER_MIN)
    }

    /// Value for a slider position, rounded to the nearest integer.
    ///
    /// Positions outside `[0, 100]` are clamped, so the result always lies in
    /// `[min_value, max_value]` (up to rounding).
    pub fn linear_to_value(&self, position: f64) -> f64 {
        let position = position.clamp(SLIDER_MIN, SLIDER_MAX);
        10f64
            .powf(self.min_value.log10() + self.log_step() * (position - SLIDER_MIN))
            .round()
    }

    /// Slider position for a value, clamped to `[0, 100]`.
    ///
    /// Values below `min_value` pin to 0 and above `max_value` pin to 100.
    /// Non-positive or NaN input yields `NaN`; use
    /// [`checked_value_to_linear`](Self::checked_value_to_linear) when the
    /// value has not been validated.
    pub fn value_to_linear(&self, value: f64) -> f64 {
        if value.is_nan() || value <= 0.0 {
            return f64::NAN;
        }
        let position = SLIDER_MIN + (value.log10() - self.min_value.log10()) / self.log_step();
        position.clamp(SLIDER_MIN, SLIDER_MAX)
    }

    /// Like [`value_to_linear`](Self::value_to_linear) but rejects values the
    /// scale is not defined for.
    pub fn checked_value_to_linear(&self, value: f64) -> Result<f64, DomainError> {
        ensure_finite("value", value)?;
        ensure_positive("value", value)?;
        Ok(self.value_to_linear(value))
    }

    /// Slider position for an integer count, e.g. active users.
    pub fn count_to_linear(&self, count: u64) -> f64 {
        self.value_to_linear(count as f64)
    }

    /// Integer count for a slider position.
    pub fn linear_to_count(&self, position: f64) -> u64 {
        self.linear_to_value(position) as u64
    }
}

impl Default for LogScale {
    fn default() -> Self {
        Self::ACTIVE_USERS
    }
}

impl ValueScale for LogScale {
    fn to_value(&self, position: f64) -> f64 {
        self.linear_to_value(position)
    }

    fn to_position(&self, value: f64) -> f64 {
        self.value_to_linear(value)
    }
}
