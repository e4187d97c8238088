//! Receipt and claims-table rendering
//!
//! Layout mirrors the legacy One Stop receipts: ruled sections, left-hand
//! labels padded to a fixed column, dollar figures as `$#,###.##`, dates as
//! `YYYY-MM-DD`.

use core_kernel::format_iso_date;
use domain_policy::{ClaimRecord, PaymentType};

use crate::record::PolicyRecord;

const RULE_WIDTH: usize = 37;
const LABEL_WIDTH: usize = 27;

fn line(label: &str, value: impl ToString) -> String {
    format!("{:<width$}{}", label, value.to_string(), width = LABEL_WIDTH)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Renders the policy information receipt
pub fn receipt(record: &PolicyRecord) -> String {
    let holder = &record.holder;
    let quote = &record.quote;

    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        String::new(),
        "Policy Information".to_string(),
        "-".repeat(RULE_WIDTH),
        String::new(),
        line("Date:", format_iso_date(record.issued_on)),
        line("Policy Number:", record.policy_number),
        line("Policy Holder:", holder.full_name()),
        line("Address:", &holder.address),
        line("City:", &holder.city),
        line("Province:", holder.province),
        line("Postal Code:", &holder.postal_code),
        line("Phone Number:", &holder.phone_number),
        line("Number of Vehicles:", record.options.num_vehicles),
        line(
            "Extra Liability Coverage:",
            yes_no(record.options.extra_liability),
        ),
        line("Glass Coverage:", yes_no(record.options.glass_coverage)),
        line("Loan Coverage:", yes_no(record.options.loan_coverage)),
        line("Payment Type:", record.options.payment_type.label()),
    ];

    if record.options.payment_type == PaymentType::DownPay {
        lines.push(line("Down Payment:", quote.down_payment));
    }

    lines.extend([
        String::new(),
        "-".repeat(RULE_WIDTH),
        String::new(),
        line("Premium:", quote.premium),
        line("Process Fee:", quote.process_fee),
        line("Subtotal:", quote.subtotal),
        line("Down Payment:", quote.down_payment),
        line("After Down Payment:", quote.balance),
        line("HST:", quote.hst),
        line("Total:", quote.total),
        String::new(),
        "=".repeat(RULE_WIDTH),
    ]);

    lines.join("\n")
}

/// Renders the claims table, one row per reported claim
pub fn claims_table(claims: &[ClaimRecord]) -> String {
    let mut lines = vec![
        format!("{:<12}{:<14}{:>10}", "Claim #", "Claim Date", "Amount"),
        "-".repeat(38),
    ];
    for claim in claims {
        lines.push(format!(
            "{:<12}{:<14}{:>10}",
            claim.claim_number,
            format_iso_date(claim.claim_date),
            claim.amount.to_string(),
        ));
    }
    lines.join("\n")
}
