//! Core Kernel - Foundational types for the auto policy intake system
//!
//! This crate provides the building blocks used across the domain modules:
//! - Money with precise decimal arithmetic and ledger-style formatting
//! - Date parsing and rendering helpers
//! - Common error types

pub mod error;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use money::{Money, MoneyError, Rate};
pub use temporal::{format_iso_date, parse_iso_date, TemporalError};
