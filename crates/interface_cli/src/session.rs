//! The interactive intake session
//!
//! One linear pass: holder fields, coverage options, payment, claims,
//! quote, receipt, done. All validation lives in the domain crates as pure
//! functions; this loop only asks, rejects, and re-asks. There is no bound
//! on retries - the program is an interactive terminal tool and blocks
//! until it gets a usable answer or the input stream closes.

use std::io::{BufRead, Write};

use core_kernel::{parse_iso_date, Money, MoneyError};
use domain_party::{
    format_postal_code, title_case, validate_name_field, validate_phone_number,
    validate_postal_code, PolicyHolder, Province,
};
use domain_policy::{
    is_claim_terminator, parse_vehicle_count, parse_yes_no, ClaimRecord, PaymentType,
    PolicyOptions,
};

use crate::config::IntakeConfig;
use crate::error::IntakeError;
use crate::record::PolicyRecord;
use crate::render;

const RETRY_GENERIC: &str = "Invalid input. Try again.";
const RETRY_RESPONSE: &str = "Invalid input. Please enter a valid response.";
const RETRY_NUMBER: &str = "Invalid input. Please enter a valid number.";

/// An interactive intake session over arbitrary line-based I/O
///
/// Generic over `BufRead`/`Write` so tests can drive the entire
/// conversation from a `Cursor` and capture the output.
pub struct IntakeSession<R, W> {
    input: R,
    output: W,
    config: IntakeConfig,
}

impl<R: BufRead, W: Write> IntakeSession<R, W> {
    pub fn new(input: R, output: W, config: IntakeConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs the session to completion and returns the finished record
    ///
    /// Writes the receipt and claims table to the output stream. Nothing
    /// is persisted here; the caller appends the record to the store once
    /// the session has fully completed.
    ///
    /// # Errors
    ///
    /// Only I/O failures and end-of-input abort the session; invalid
    /// answers are re-prompted indefinitely.
    pub fn run(mut self) -> Result<PolicyRecord, IntakeError> {
        writeln!(self.output)?;
        writeln!(self.output, "Enter the following information:")?;
        writeln!(self.output)?;

        let holder = self.collect_holder()?;
        let options = self.collect_options()?;
        let claims = self.collect_claims()?;

        tracing::debug!(
            customer = %holder.full_name(),
            claims = claims.len(),
            "Intake answers collected"
        );

        let quote = self.config.rating.quote(&options);
        let record = PolicyRecord {
            policy_number: self.config.policy_number,
            issued_on: chrono::Local::now().date_naive(),
            holder,
            options,
            quote,
            claims,
        };

        writeln!(self.output)?;
        writeln!(self.output, "{}", render::receipt(&record))?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", render::claims_table(&record.claims))?;

        Ok(record)
    }

    fn collect_holder(&mut self) -> Result<PolicyHolder, IntakeError> {
        let first_name = self.ask_name_field("Enter first name: ")?;
        let last_name = self.ask_name_field("Enter last name: ")?;
        let address = self.ask_name_field("Enter address: ")?;
        let city = self.ask_name_field("Enter city: ")?;

        let province = self.ask_until("Enter province (XX): ", "Invalid province. Try again.", |s| {
            Province::from_code(s).ok()
        })?;

        let postal_code = self.ask_until(
            "Enter postal code (X#X #X#): ",
            "Invalid postal code. Try again.",
            |s| {
                let formatted = format_postal_code(s);
                validate_postal_code(&formatted).then_some(formatted)
            },
        )?;

        let phone_number = self.ask_until(
            "Enter phone number (##########): ",
            "Invalid phone number. Try again.",
            |s| validate_phone_number(s).then(|| s.to_string()),
        )?;

        Ok(PolicyHolder::new(
            &first_name,
            &last_name,
            &address,
            &city,
            province,
            &postal_code,
            &phone_number,
        )?)
    }

    fn collect_options(&mut self) -> Result<PolicyOptions, IntakeError> {
        let num_vehicles = self.ask_until(
            "Enter the number of vehicles: ",
            "Invalid input. Please enter a valid number of vehicles.",
            parse_vehicle_count,
        )?;

        let extra_liability =
            self.ask_yes_no("Do you want extra liability coverage up to $1,000,000? (Y/N): ")?;
        let glass_coverage = self.ask_yes_no("Do you want glass coverage? (Y/N): ")?;
        let loan_coverage = self.ask_yes_no("Do you want loan coverage? (Y/N): ")?;

        let payment_type = self.ask_until(
            "Please enter your payment type ('F' for Full, 'M' for Monthly, 'D' for Downpay): ",
            "Invalid input. Please enter a valid payment type.",
            |s| PaymentType::from_code(s).ok(),
        )?;

        let down_payment = if payment_type == PaymentType::DownPay {
            self.ask_amount(
                "Enter down payment: ",
                "Down payment cannot be negative. Try again.",
            )?
        } else {
            Money::zero()
        };

        Ok(PolicyOptions {
            num_vehicles,
            extra_liability,
            glass_coverage,
            loan_coverage,
            payment_type,
            down_payment,
        })
    }

    fn collect_claims(&mut self) -> Result<Vec<ClaimRecord>, IntakeError> {
        let mut claims = Vec::new();
        loop {
            let answer = self.ask("Enter claim number (or 'q' to finish): ")?;
            if is_claim_terminator(&answer) {
                break;
            }
            // Claim numbers are free text; the legacy form stored them
            // lower-cased and never checked for duplicates.
            let claim_number = answer.to_lowercase();

            let claim_date = self.ask_until(
                "Enter claim date (YYYY-MM-DD): ",
                "Invalid date format. Please use YYYY-MM-DD.",
                |s| parse_iso_date(s).ok(),
            )?;

            let amount = self.ask_amount(
                "Enter claim amount: ",
                "Claim amount cannot be negative. Try again.",
            )?;

            claims.push(ClaimRecord {
                claim_number,
                claim_date,
                amount,
            });
        }
        Ok(claims)
    }

    /// Asks for a name-like field (first/last name, address, city) and
    /// returns it title-cased
    fn ask_name_field(&mut self, prompt: &str) -> Result<String, IntakeError> {
        self.ask_until(prompt, RETRY_GENERIC, |s| {
            let normalized = title_case(s);
            validate_name_field(&normalized).then_some(normalized)
        })
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, IntakeError> {
        self.ask_until(prompt, RETRY_RESPONSE, parse_yes_no)
    }

    /// Asks for a non-negative dollar amount, distinguishing parse
    /// failures from negative values in the retry message
    fn ask_amount(&mut self, prompt: &str, negative_msg: &str) -> Result<Money, IntakeError> {
        loop {
            let answer = self.ask(prompt)?;
            match Money::parse_non_negative(&answer) {
                Ok(amount) => return Ok(amount),
                Err(MoneyError::NegativeAmount(_)) => {
                    writeln!(self.output, "{}", negative_msg)?;
                }
                Err(MoneyError::InvalidAmount(_)) => {
                    writeln!(self.output, "{}", RETRY_NUMBER)?;
                }
            }
        }
    }

    /// Asks the same question until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, IntakeError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "{}", retry)?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, IntakeError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String, IntakeError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(IntakeError::UnexpectedEof);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
