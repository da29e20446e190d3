//! Error types for the DeFindex calculator.
use thiserror::Error;

/// An input or parameter outside the domain the model is defined on.
///
/// Every variant names the offending field so callers can point the user at it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{field} must not be negative: {value}")] Negative { field: &'static str, value: f64 },
    #[error("{field} must be finite: {value}")] NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive: {value}")] NonPositive { field: &'static str, value: f64 },
    #[error("{field} out of range: {value} not in [{min}, {max}]")] OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
    #[error("invalid scale bounds: min {min} must be below max {max}")] InvalidBounds { min: f64, max: f64 },
    #[error("unknown scenario: {0}")] UnknownScenario(String),
    #[error("empty scenario list")] NoScenarios,
}

impl DomainError {
    /// Name of the field that failed validation, if the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Negative { field, .. }
            | Self::NotFinite { field, .. }
            | Self::NonPositive { field, .. }
            | Self::OutOfRange { field, .. } => Some(*field),
            Self::InvalidBounds { .. } | Self::UnknownScenario(_) | Self::NoScenarios => None,
        }
    }
}

/// Reject NaN and infinities.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NotFinite { field, value })
    }
}

/// Reject NaN, infinities and negative values.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(DomainError::Negative { field, value });
    }
    Ok(value)
}

/// Reject NaN, infinities, zero and negative values.
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, DomainError> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(DomainError::NonPositive { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_names_field() {
        let err = ensure_non_negative("avg_balance", -1.0).unwrap_err();
        assert_eq!(err.field(), Some("avg_balance"));
        assert_eq!(err.to_string(), "avg_balance must not be negative: -1");
    }

    #[test]
    fn nan_is_not_finite() {
        let err = ensure_non_negative("opt_in_rate", f64::NAN).unwrap_err();
        assert!(matches!(err, DomainError::NotFinite { field: "opt_in_rate", .. }));
    }

    #[test]
    fn zero_is_not_positive() {
        assert!(matches!(
            ensure_positive("value", 0.0),
            Err(DomainError::NonPositive { .. })
        ));
        assert_eq!(ensure_positive("value", 0.5).unwrap(), 0.5);
    }

    #[test]
    fn zero_is_non_negative() {
        assert_eq!(ensure_non_negative("opt_in_rate", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn scenario_errors_have_no_field() {
        assert_eq!(DomainError::UnknownScenario("Wild".into()).field(), None);
        assert_eq!(DomainError::NoScenarios.field(), None);
    }

    #[test]
    fn out_of_range_message() {
        let err = DomainError::OutOfRange { field: "opt_in_rate", value: 120.0, min: 0.0, max: 100.0 };
        assert_eq!(err.to_string(), "opt_in_rate out of range: 120 not in [0, 100]");
    }
}
