//! Lead capture error types.

use std::fmt;

use thiserror::Error;

/// A single form field that failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email")]
    EmailInvalid,

    #[error("Company is required")]
    CompanyRequired,
}

impl FieldError {
    /// Form field the message belongs next to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired => "name",
            Self::EmailRequired | Self::EmailInvalid => "email",
            Self::CompanyRequired => "company",
        }
    }
}

/// Every failing field of one submission, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.field(), err)?;
        }
        Ok(())
    }
}

/// Errors that can occur while capturing or storing leads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    /// The submitted form has missing or malformed fields.
    #[error("invalid lead: {0}")]
    Validation(FieldErrors),

    /// Collection key is empty or would escape the store directory.
    #[error("invalid collection key: {0:?}")]
    InvalidCollection(String),

    /// Stored collection could not be parsed.
    #[error("corrupted collection {collection}: {reason}")]
    Corrupted { collection: String, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization error.
    #[error("serialization: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(FieldError::EmailInvalid.to_string(), "Please enter a valid email");
        assert_eq!(FieldError::EmailInvalid.field(), "email");
    }

    #[test]
    fn display_validation_lists_fields() {
        let e = LeadError::Validation(FieldErrors(vec![
            FieldError::NameRequired,
            FieldError::CompanyRequired,
        ]));
        assert_eq!(
            e.to_string(),
            "invalid lead: name: Name is required; company: Company is required"
        );
    }

    #[test]
    fn field_errors_lookup() {
        let errs = FieldErrors(vec![FieldError::EmailRequired]);
        assert_eq!(errs.get("email"), Some(&FieldError::EmailRequired));
        assert_eq!(errs.get("name"), None);
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn display_corrupted() {
        let e = LeadError::Corrupted {
            collection: "defindex_leads".into(),
            reason: "expected value".into(),
        };
        assert_eq!(e.to_string(), "corrupted collection defindex_leads: expected value");
    }

    #[test]
    fn clone_and_eq() {
        let e1 = LeadError::IoError("disk full".into());
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
