//! Policy domain errors

use thiserror::Error;

/// Errors raised while parsing policy option answers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown payment type: {0:?} (expected F, M, or D)")]
    UnknownPaymentType(String),

    #[error("Invalid vehicle count: {0:?}")]
    InvalidVehicleCount(String),
}
