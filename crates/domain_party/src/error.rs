//! Party domain errors

use thiserror::Error;

/// Errors raised when policy holder fields fail validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartyError {
    #[error("Invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid province code: {0:?}")]
    InvalidProvince(String),

    #[error("Invalid postal code: {0:?}")]
    InvalidPostalCode(String),

    #[error("Invalid phone number: {0:?}")]
    InvalidPhoneNumber(String),
}
