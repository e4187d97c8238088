//! Money types with precise decimal arithmetic
//!
//! Monetary values are backed by `rust_decimal` so that premium and tax
//! calculations stay exact. Display output follows the ledger convention
//! `$#,###.##`: comma-grouped, two decimal places, banker's rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building money values from user input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
}

/// A Canadian-dollar amount
///
/// All intake pricing is in a single currency, so `Money` is a thin wrapper
/// over `Decimal`. Amounts are stored with 4 decimal places internally;
/// rendering rounds to cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(4))
    }

    /// Creates Money from an integer number of cents
    pub fn from_minor(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies by a scalar (e.g. a tax multiplier)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }

    /// Rounds to cents using banker's rounding (round half to even)
    pub fn round_to_cents(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Parses a non-negative dollar amount from user input
    ///
    /// This is the validator behind the down payment and claim amount
    /// questions: the text must parse as a decimal number and be >= 0.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the text does not parse, or
    /// `MoneyError::NegativeAmount` if it parses to a negative value.
    pub fn parse_non_negative(text: &str) -> Result<Self, MoneyError> {
        let amount = Decimal::from_str(text.trim())
            .map_err(|_| MoneyError::InvalidAmount(text.to_string()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::NegativeAmount(amount));
        }
        Ok(Self::new(amount))
    }
}

impl fmt::Display for Money {
    /// Formats as `$#,###.##` (e.g. `$1,234.50`); negative amounts render
    /// with the sign after the dollar symbol, as the legacy receipts did.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "${}{}.{}", sign, grouped, frac_part)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

/// A fractional rate (e.g. discount rate, tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g. 0.15 for 15%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g. 0.15 for 15%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the multiplier that adds this rate on top of a base amount
    /// (e.g. 1.15 for a 15% tax)
    pub fn gross_multiplier(&self) -> Decimal {
        Decimal::ONE + self.value
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.value * dec!(100)).round_dp(4))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_display_always_has_two_decimals(cents in -1_000_000_000i64..1_000_000_000i64) {
            let rendered = Money::from_minor(cents).to_string();
            prop_assert!(rendered.starts_with('$'));
            let frac = rendered.rsplit('.').next().unwrap();
            prop_assert_eq!(frac.len(), 2);
            prop_assert!(frac.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn money_addition_is_commutative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);

            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn parse_never_yields_negative(text in "\\PC*") {
            if let Ok(money) = Money::parse_non_negative(&text) {
                prop_assert!(!money.is_negative());
            }
        }
    }
}
