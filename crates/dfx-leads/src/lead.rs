//! Lead records and the form they are captured from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldErrors, LeadError};

/// A captured contact request. Append-only once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Telegram username without the leading `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    /// Submission time (RFC 3339 in the stored JSON).
    pub timestamp: DateTime<Utc>,
}

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub telegram: String,
}

impl LeadForm {
    /// Check every required field, collecting all failures.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::EmailInvalid);
        }

        if self.company.trim().is_empty() {
            errors.push(FieldError::CompanyRequired);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }

    /// Validate and stamp the form into a [`Lead`].
    ///
    /// Name and company are trimmed; a blank Telegram handle becomes `None`.
    pub fn into_lead(self, timestamp: DateTime<Utc>) -> Result<Lead, LeadError> {
        self.validate().map_err(LeadError::Validation)?;
        Ok(Lead {
            name: self.name.trim().to_string(),
            email: self.email,
            company: self.company.trim().to_string(),
            telegram: normalize_telegram(&self.telegram),
            timestamp,
        })
    }
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, non-empty
/// local part, and a dot in the domain with characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn normalize_telegram(raw: &str) -> Option<String> {
    let handle = raw.trim();
    let handle = handle.strip_prefix('@').unwrap_or(handle);
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form() -> LeadForm {
        LeadForm {
            name: "Ada Lovelace".into(),
            email: "ada@wallet.example".into(),
            company: "Acme Wallet".into(),
            telegram: String::new(),
        }
    }

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    // --- email shape ---

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a.b+tag@mail.co.uk"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@example."));
        assert!(!is_valid_email("jo hn@example.com"));
        assert!(!is_valid_email(" john@example.com"));
        assert!(!is_valid_email("john@@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    // --- form validation ---

    #[test]
    fn valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errs = LeadForm::default().validate().unwrap_err();
        assert_eq!(
            errs.0,
            vec![
                FieldError::NameRequired,
                FieldError::EmailRequired,
                FieldError::CompanyRequired
            ]
        );
    }

    #[test]
    fn blank_name_is_missing() {
        let errs = LeadForm { name: "   ".into(), ..form() }.validate().unwrap_err();
        assert_eq!(errs.0, vec![FieldError::NameRequired]);
    }

    #[test]
    fn bad_email_is_invalid_not_missing() {
        let errs = LeadForm { email: "ada@wallet".into(), ..form() }.validate().unwrap_err();
        assert_eq!(errs.get("email"), Some(&FieldError::EmailInvalid));
    }

    // --- into_lead ---

    #[test]
    fn into_lead_trims_and_stamps() {
        let lead = LeadForm {
            name: "  Ada Lovelace ".into(),
            company: "Acme Wallet\n".into(),
            ..form()
        }
        .into_lead(ts())
        .unwrap();
        assert_eq!(lead.name, "Ada Lovelace");
        assert_eq!(lead.company, "Acme Wallet");
        assert_eq!(lead.email, "ada@wallet.example");
        assert_eq!(lead.telegram, None);
        assert_eq!(lead.timestamp, ts());
    }

    #[test]
    fn telegram_handle_normalized() {
        let lead = LeadForm { telegram: " @ada_l ".into(), ..form() }.into_lead(ts()).unwrap();
        assert_eq!(lead.telegram.as_deref(), Some("ada_l"));

        let lead = LeadForm { telegram: "@".into(), ..form() }.into_lead(ts()).unwrap();
        assert_eq!(lead.telegram, None);
    }

    #[test]
    fn into_lead_rejects_invalid_form() {
        let err = LeadForm { company: String::new(), ..form() }.into_lead(ts()).unwrap_err();
        assert_eq!(
            err,
            LeadError::Validation(FieldErrors(vec![FieldError::CompanyRequired]))
        );
    }

    #[test]
    fn lead_json_shape() {
        let lead = LeadForm { telegram: "ada".into(), ..form() }.into_lead(ts()).unwrap();
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["telegram"], "ada");
        assert_eq!(json["timestamp"], "2025-03-01T12:00:00Z");

        let without = form().into_lead(ts()).unwrap();
        let json = serde_json::to_value(&without).unwrap();
        assert!(json.get("telegram").is_none());
    }
}
