//! Intake configuration

use std::path::PathBuf;

use domain_policy::RatingTable;

/// Immutable configuration for one intake run
///
/// The program takes no flags, environment variables, or config files; the
/// binary constructs this once with the legacy defaults and threads it
/// through the session.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Fixed policy number stamped on every record
    pub policy_number: u32,
    /// Path of the append-only policy ledger
    pub policies_path: PathBuf,
    /// Log level for the tracing subscriber
    pub log_level: String,
    /// Pricing table used to quote the session
    pub rating: RatingTable,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            policy_number: 1944,
            policies_path: PathBuf::from("Policies.dat"),
            log_level: "info".to_string(),
            rating: RatingTable::default(),
        }
    }
}
