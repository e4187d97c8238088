//! Policy Intake Domain
//!
//! This crate implements the pricing side of an intake session:
//! - **Value Objects**: `PolicyOptions`, `PaymentType`, `ClaimRecord`
//! - **Rating**: `RatingTable`, an explicit immutable pricing configuration
//!   constructed once by the orchestrator, and the `Quote` it produces
//!
//! The rating rules are deterministic: a fixed base premium, a single
//! multi-vehicle discount applied to the base alone, three flat surcharges,
//! a flat process fee, and the HST rate.

pub mod claims;
pub mod error;
pub mod options;
pub mod rating;

pub use claims::{is_claim_terminator, ClaimRecord};
pub use error::PolicyError;
pub use options::{parse_vehicle_count, parse_yes_no, PaymentType, PolicyOptions};
pub use rating::{Quote, RatingTable};
