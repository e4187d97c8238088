//! Rating table and quote calculations
//!
//! The pricing rules are a fixed table: base premium, one multi-vehicle
//! discount, three flat surcharges, a process fee, and the HST rate. The
//! table is an explicit immutable configuration value rather than a set of
//! module constants, so the orchestrator constructs it once and threads it
//! through.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::options::{PaymentType, PolicyOptions};

/// The deterministic pricing table for intake quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingTable {
    /// Base annual premium before adjustments
    pub base_premium: Money,
    /// Discount applied once to the base premium when insuring more than
    /// one vehicle
    pub multi_vehicle_discount: Rate,
    /// Flat surcharge for extra liability coverage
    pub extra_liability_surcharge: Money,
    /// Flat surcharge for glass coverage
    pub glass_coverage_surcharge: Money,
    /// Flat surcharge for loan coverage
    pub loan_coverage_surcharge: Money,
    /// Fixed administrative fee added to every policy
    pub process_fee: Money,
    /// Harmonized sales tax rate
    pub hst_rate: Rate,
}

impl Default for RatingTable {
    /// The legacy One Stop Insurance table
    fn default() -> Self {
        Self {
            base_premium: Money::new(dec!(869.00)),
            multi_vehicle_discount: Rate::new(dec!(0.25)),
            extra_liability_surcharge: Money::new(dec!(130.00)),
            glass_coverage_surcharge: Money::new(dec!(86.00)),
            loan_coverage_surcharge: Money::new(dec!(58.00)),
            process_fee: Money::new(dec!(39.99)),
            hst_rate: Rate::new(dec!(0.15)),
        }
    }
}

impl RatingTable {
    /// Computes the premium for the selected options
    ///
    /// The multi-vehicle discount applies to the base premium alone and at
    /// most once, before any surcharge; surcharges are never discounted.
    pub fn premium(&self, options: &PolicyOptions) -> Money {
        let mut premium = self.base_premium;
        if options.num_vehicles > 1 {
            premium = premium - self.multi_vehicle_discount.apply(&premium);
        }
        if options.extra_liability {
            premium = premium + self.extra_liability_surcharge;
        }
        if options.glass_coverage {
            premium = premium + self.glass_coverage_surcharge;
        }
        if options.loan_coverage {
            premium = premium + self.loan_coverage_surcharge;
        }
        premium
    }

    /// Produces the full quote for the selected options
    pub fn quote(&self, options: &PolicyOptions) -> Quote {
        let premium = self.premium(options);
        let subtotal = premium + self.process_fee;

        let down_payment = match options.payment_type {
            PaymentType::DownPay => options.down_payment,
            PaymentType::Full | PaymentType::Monthly => Money::zero(),
        };
        // A down payment larger than the subtotal drives the balance
        // negative; the legacy program allowed it and so do we.
        let balance = subtotal - down_payment;

        let hst = self.hst_rate.apply(&balance);
        let total = balance.multiply(self.hst_rate.gross_multiplier());
        // The legacy ledger records the tax figure alone as the total
        // cost, while the receipt total includes the balance. Both values
        // are kept, computed independently, and never reconciled.
        let ledger_total = self.hst_rate.apply(&balance);

        Quote {
            premium,
            process_fee: self.process_fee,
            subtotal,
            down_payment,
            balance,
            hst,
            total,
            ledger_total,
        }
    }
}

/// The computed money figures for one policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Premium after discount and surcharges
    pub premium: Money,
    /// Fixed process fee
    pub process_fee: Money,
    /// Premium plus process fee
    pub subtotal: Money,
    /// Down payment collected (zero unless paying by down payment)
    pub down_payment: Money,
    /// Subtotal less the down payment
    pub balance: Money,
    /// HST on the balance
    pub hst: Money,
    /// Receipt total: balance plus HST
    pub total: Money,
    /// Figure written to the policy ledger as "Total Cost"
    pub ledger_total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn options(vehicles: u32, extras: bool, payment_type: PaymentType, down: Money) -> PolicyOptions {
        PolicyOptions {
            num_vehicles: vehicles,
            extra_liability: extras,
            glass_coverage: extras,
            loan_coverage: extras,
            payment_type,
            down_payment: down,
        }
    }

    #[test]
    fn test_base_premium_without_extras() {
        let table = RatingTable::default();
        let premium = table.premium(&options(1, false, PaymentType::Full, Money::zero()));
        assert_eq!(premium.amount(), dec!(869.00));
    }

    #[test]
    fn test_discount_applies_to_base_before_surcharges() {
        let table = RatingTable::default();
        let premium = table.premium(&options(2, true, PaymentType::Full, Money::zero()));
        // 869.00 * 0.75 + 130.00 + 86.00 + 58.00
        assert_eq!(premium.amount(), dec!(925.75));
    }

    #[test]
    fn test_discount_applies_once_regardless_of_fleet_size() {
        let table = RatingTable::default();
        let two = table.premium(&options(2, false, PaymentType::Full, Money::zero()));
        let nine = table.premium(&options(9, false, PaymentType::Full, Money::zero()));
        assert_eq!(two, nine);
        assert_eq!(two.amount(), dec!(651.75));
    }

    #[test]
    fn test_quote_ignores_down_payment_for_full_payment() {
        let table = RatingTable::default();
        let quote = table.quote(&options(
            1,
            false,
            PaymentType::Full,
            Money::new(dec!(500)),
        ));
        assert_eq!(quote.down_payment, Money::zero());
        assert_eq!(quote.balance, quote.subtotal);
    }
}
