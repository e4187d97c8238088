//! Interface errors

use thiserror::Error;

use domain_party::PartyError;

/// Errors that abort an intake session
///
/// User input mistakes never reach this type; they are handled by
/// re-prompting. Only I/O failures and a closed input stream are fatal.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Party(#[from] PartyError),
}
