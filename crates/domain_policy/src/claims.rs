//! Prior claims reported during intake

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// A prior loss event reported by the customer
///
/// Claim numbers are free text and deliberately unchecked: the legacy form
/// accepted anything except the collection terminator, with no duplicate
/// detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Claim number as entered
    pub claim_number: String,
    /// Date of the claim
    pub claim_date: NaiveDate,
    /// Claimed amount; never negative
    pub amount: Money,
}

/// Returns true if the input ends the claim collection loop
///
/// The terminator is `q`, in any letter case. It is consumed by the loop
/// and never stored as a claim number.
pub fn is_claim_terminator(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("q")
}
