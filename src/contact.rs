//! Contact form submission.
//!
//! Builds the lead payload sent to the lead-storage backend: the address
//! form state, the contact details, and the eligibility the resolver computed
//! for that address.

use serde::{Deserialize, Serialize};

use crate::eligibility::messages::resolve_contact_message;
use crate::eligibility::types::AddressData;
use crate::error::{EligibilityError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactFormValues {
    pub fn validate(&self) -> Result<()> {
        if self.last_name.trim().is_empty() {
            return Err(EligibilityError::InvalidContact("last name is required".into()));
        }
        if !is_plausible_email(&self.email) {
            return Err(EligibilityError::InvalidContact(format!(
                "invalid email address: {:?}",
                self.email
            )));
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace. Deliverability is the backend's problem.
fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

/// Lead payload: `{...addressData, ...values, computedEligibility, city, postcode}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub address: AddressData,
    #[serde(flatten)]
    pub values: ContactFormValues,
    /// Absent when no contact message applied (no heating type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_eligibility: Option<bool>,
    pub city: Option<String>,
    pub postcode: Option<String>,
}

impl ContactSubmission {
    pub fn new(address: AddressData, values: ContactFormValues) -> Result<Self> {
        values.validate()?;

        let computed_eligibility = resolve_contact_message(&address.facts()).map(|b| b.eligibility);
        let city = address.city().map(str::to_string);
        let postcode = address.postcode().map(str::to_string);

        tracing::debug!(
            "Contact submission for {:?} (computed eligibility: {:?})",
            address.address,
            computed_eligibility
        );

        Ok(Self {
            address,
            values,
            computed_eligibility,
            city,
            postcode,
        })
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> ContactFormValues {
        ContactFormValues {
            first_name: Some("Camille".into()),
            last_name: "Martin".into(),
            email: "camille.martin@example.fr".into(),
            phone: None,
        }
    }

    fn address(json: &str) -> AddressData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_email_plausibility() {
        assert!(is_plausible_email("a@b.fr"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b.fr"));
        assert!(!is_plausible_email("a b@c.fr"));
        assert!(!is_plausible_email("a@b..fr"));
        assert!(!is_plausible_email("a@@b.fr"));
    }

    #[test]
    fn test_validation_errors() {
        let mut v = values();
        v.last_name = "  ".into();
        assert!(matches!(v.validate(), Err(EligibilityError::InvalidContact(_))));

        let mut v = values();
        v.email = "nope".into();
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_payload_carries_computed_eligibility() {
        let address = address(
            r#"{
                "address": "3 rue du petit bois 78370 Plaisir",
                "heatingType": "collectif",
                "eligibility": {"isEligible": true, "distance": 50},
                "geoAddress": {"properties": {"city": "Plaisir", "postcode": "78370"}}
            }"#,
        );

        let submission = ContactSubmission::new(address, values()).unwrap();
        assert_eq!(submission.computed_eligibility, Some(true));

        let json = submission.to_json().unwrap();
        assert_eq!(json["computedEligibility"], true);
        assert_eq!(json["city"], "Plaisir");
        assert_eq!(json["postcode"], "78370");
        assert_eq!(json["heatingType"], "collectif");
        assert_eq!(json["lastName"], "Martin");
        assert_eq!(json["eligibility"]["distance"], 50.0);
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_payload_without_heating_type() {
        let address = address(r#"{"address": "1 rue du berry", "heatingType": "poele"}"#);
        let submission = ContactSubmission::new(address, values()).unwrap();

        assert_eq!(submission.computed_eligibility, None);
        let json = submission.to_json().unwrap();
        assert!(json.get("computedEligibility").is_none());
        assert!(json["city"].is_null());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut v = values();
        v.email = String::new();
        assert!(ContactSubmission::new(AddressData::default(), v).is_err());
    }
}
