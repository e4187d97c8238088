//! The per-session policy record and its ledger serialization

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::format_iso_date;
use domain_party::PolicyHolder;
use domain_policy::{ClaimRecord, PolicyOptions, Quote};

/// Everything produced by one completed intake session
///
/// Exists only for the duration of the session: it is rendered to the
/// console, serialized to the ledger, and never read back or mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRecord {
    /// Fixed policy number from the configuration
    pub policy_number: u32,
    /// Date the session ran
    pub issued_on: NaiveDate,
    pub holder: PolicyHolder,
    pub options: PolicyOptions,
    pub quote: Quote,
    /// Prior claims in entry order; may be empty
    pub claims: Vec<ClaimRecord>,
}

impl PolicyRecord {
    /// Renders the multi-line ledger block for this record
    ///
    /// Human-readable only; the file is never re-parsed. The "Total Cost"
    /// figure is the ledger total (balance x HST rate), which differs from
    /// the receipt total on purpose.
    pub fn file_block(&self) -> String {
        format!(
            "Policy Number: {}, Customer: {},\n\
             Address: {}, City: {}, Province: {}, Postal Code: {},\n\
             Total Cost: {}, Claims: {}",
            self.policy_number,
            self.holder.full_name(),
            self.holder.address,
            self.holder.city,
            self.holder.province,
            self.holder.postal_code,
            self.quote.ledger_total,
            claims_dump(&self.claims),
        )
    }
}

/// Literal textual dump of the claims sequence, e.g.
/// `[("c100", 2023-01-15, $500.00), ("c101", 2024-02-02, $1,200.00)]`
fn claims_dump(claims: &[ClaimRecord]) -> String {
    let entries: Vec<String> = claims
        .iter()
        .map(|claim| {
            format!(
                "({:?}, {}, {})",
                claim.claim_number,
                format_iso_date(claim.claim_date),
                claim.amount
            )
        })
        .collect();
    format!("[{}]", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use domain_party::Province;
    use domain_policy::{PaymentType, RatingTable};
    use rust_decimal_macros::dec;

    fn sample_record() -> PolicyRecord {
        let holder = PolicyHolder::new(
            "john",
            "smith",
            "main street",
            "gander",
            Province::NewfoundlandAndLabrador,
            "a1b2c3",
            "7095551234",
        )
        .unwrap();
        let options = PolicyOptions {
            num_vehicles: 2,
            extra_liability: true,
            glass_coverage: true,
            loan_coverage: true,
            payment_type: PaymentType::DownPay,
            down_payment: Money::new(dec!(100)),
        };
        let quote = RatingTable::default().quote(&options);
        PolicyRecord {
            policy_number: 1944,
            issued_on: NaiveDate::from_ymd_opt(2025, 3, 22).unwrap(),
            holder,
            options,
            quote,
            claims: vec![ClaimRecord {
                claim_number: "c100".to_string(),
                claim_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
                amount: Money::new(dec!(500)),
            }],
        }
    }

    #[test]
    fn test_file_block_layout() {
        let block = sample_record().file_block();
        assert_eq!(
            block,
            "Policy Number: 1944, Customer: John Smith,\n\
             Address: Main Street, City: Gander, Province: NL, Postal Code: A1B 2C3,\n\
             Total Cost: $129.86, Claims: [(\"c100\", 2023-01-15, $500.00)]"
        );
    }

    #[test]
    fn test_file_block_with_no_claims() {
        let mut record = sample_record();
        record.claims.clear();
        assert!(record.file_block().ends_with("Claims: []"));
    }
}
