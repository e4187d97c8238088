//! Rating and Quote Tests
//!
//! Worked pricing examples for the legacy One Stop table:
//! - Premium with and without the multi-vehicle discount and surcharges
//! - Quote totals for each payment type
//! - The receipt total (balance x 1.15) versus the ledger total
//!   (balance x 0.15), which intentionally disagree

use core_kernel::Money;
use domain_policy::{PaymentType, PolicyOptions, RatingTable};
use rust_decimal_macros::dec;

fn base_options() -> PolicyOptions {
    PolicyOptions {
        num_vehicles: 1,
        extra_liability: false,
        glass_coverage: false,
        loan_coverage: false,
        payment_type: PaymentType::Full,
        down_payment: Money::zero(),
    }
}

mod premium_tests {
    use super::*;

    #[test]
    fn single_vehicle_no_extras_is_base_premium() {
        let table = RatingTable::default();
        assert_eq!(table.premium(&base_options()).amount(), dec!(869.00));
    }

    #[test]
    fn each_surcharge_is_additive() {
        let table = RatingTable::default();

        let mut options = base_options();
        options.extra_liability = true;
        assert_eq!(table.premium(&options).amount(), dec!(999.00));

        options.glass_coverage = true;
        assert_eq!(table.premium(&options).amount(), dec!(1085.00));

        options.loan_coverage = true;
        assert_eq!(table.premium(&options).amount(), dec!(1143.00));
    }

    #[test]
    fn multi_vehicle_discount_with_all_extras() {
        let table = RatingTable::default();
        let options = PolicyOptions {
            num_vehicles: 2,
            extra_liability: true,
            glass_coverage: true,
            loan_coverage: true,
            payment_type: PaymentType::Full,
            down_payment: Money::zero(),
        };

        // 869.00 x 0.75 = 651.75; surcharges are not discounted.
        assert_eq!(table.premium(&options).amount(), dec!(925.75));
    }
}

mod quote_tests {
    use super::*;

    fn down_pay_options() -> PolicyOptions {
        PolicyOptions {
            num_vehicles: 2,
            extra_liability: true,
            glass_coverage: true,
            loan_coverage: true,
            payment_type: PaymentType::DownPay,
            down_payment: Money::new(dec!(100)),
        }
    }

    #[test]
    fn down_payment_quote_matches_worked_example() {
        let table = RatingTable::default();
        let quote = table.quote(&down_pay_options());

        assert_eq!(quote.premium.amount(), dec!(925.75));
        assert_eq!(quote.process_fee.amount(), dec!(39.99));
        assert_eq!(quote.subtotal.amount(), dec!(965.74));
        assert_eq!(quote.down_payment.amount(), dec!(100));
        assert_eq!(quote.balance.amount(), dec!(865.74));
    }

    #[test]
    fn receipt_total_and_ledger_total_use_different_formulas() {
        let table = RatingTable::default();
        let quote = table.quote(&down_pay_options());

        // Receipt: balance x 1.15. Ledger: balance x 0.15. Both literal.
        assert_eq!(quote.total.amount(), dec!(995.601));
        assert_eq!(quote.ledger_total.amount(), dec!(129.861));
        assert_eq!(quote.hst.amount(), dec!(129.861));

        assert_eq!(quote.total.to_string(), "$995.60");
        assert_eq!(quote.ledger_total.to_string(), "$129.86");
    }

    #[test]
    fn monthly_payment_has_no_down_payment_deduction() {
        let table = RatingTable::default();
        let mut options = base_options();
        options.payment_type = PaymentType::Monthly;

        let quote = table.quote(&options);
        assert_eq!(quote.subtotal.amount(), dec!(908.99));
        assert_eq!(quote.balance.amount(), dec!(908.99));
        assert_eq!(quote.total.amount(), dec!(1045.3385));
    }

    #[test]
    fn oversized_down_payment_drives_balance_negative() {
        let table = RatingTable::default();
        let mut options = base_options();
        options.payment_type = PaymentType::DownPay;
        options.down_payment = Money::new(dec!(1000));

        let quote = table.quote(&options);
        // subtotal 908.99 - 1000.00
        assert_eq!(quote.balance.amount(), dec!(-91.01));
        assert!(quote.total.is_negative());
        assert!(quote.ledger_total.is_negative());
    }
}
