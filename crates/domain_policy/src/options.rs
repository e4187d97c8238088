//! Coverage options collected during intake

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::error::PolicyError;

/// How the customer pays for the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    /// Single full payment
    Full,
    /// Monthly installments
    Monthly,
    /// Up-front down payment, remainder owing
    DownPay,
}

impl PaymentType {
    /// Returns the single-letter intake code
    pub fn code(&self) -> char {
        match self {
            PaymentType::Full => 'F',
            PaymentType::Monthly => 'M',
            PaymentType::DownPay => 'D',
        }
    }

    /// Returns the receipt label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Full => "Full Payment",
            PaymentType::Monthly => "Monthly Payment",
            PaymentType::DownPay => "Down Pay",
        }
    }

    /// Parses the single-letter intake code, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::UnknownPaymentType` for anything but
    /// `F`, `M`, or `D`.
    pub fn from_code(text: &str) -> Result<Self, PolicyError> {
        match text.trim().to_ascii_uppercase().as_str() {
            "F" => Ok(PaymentType::Full),
            "M" => Ok(PaymentType::Monthly),
            "D" => Ok(PaymentType::DownPay),
            _ => Err(PolicyError::UnknownPaymentType(text.to_string())),
        }
    }
}

/// Parses a yes/no answer, case-insensitively
///
/// Only `Y` and `N` are accepted; anything else yields `None` and the
/// caller re-asks the question.
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_ascii_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

/// Parses a vehicle count: all digits, at least one vehicle
pub fn parse_vehicle_count(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u32>().ok().filter(|n| *n >= 1)
}

/// The coverage selections for one policy
///
/// Built once per session from validated answers; immutable afterwards and
/// consumed by the rating table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOptions {
    /// Number of vehicles on the policy (>= 1)
    pub num_vehicles: u32,
    /// Extra liability coverage up to $1,000,000
    pub extra_liability: bool,
    /// Glass coverage
    pub glass_coverage: bool,
    /// Loan coverage
    pub loan_coverage: bool,
    /// Payment type
    pub payment_type: PaymentType,
    /// Down payment; zero unless `payment_type` is `DownPay`
    pub down_payment: Money,
}
