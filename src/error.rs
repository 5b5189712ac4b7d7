//! Error types for the eligibility crate.
//!
//! The message resolver itself never fails (a missing entry is `None`).
//! These errors cover the glue around it: parsing inputs, validating the
//! contact form, decoding persisted state and reading configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EligibilityError>;

#[derive(Debug, Error)]
pub enum EligibilityError {
    /// Heating type string was neither `collectif` nor `individuel`
    #[error("unknown heating type: {0:?}")]
    UnknownHeatingType(String),

    /// Contact form rejected before building the lead payload
    #[error("invalid contact form: {0}")]
    InvalidContact(String),

    #[error("invalid configuration value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
