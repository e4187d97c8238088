//! Append-only policy ledger
//!
//! One multi-line text block per completed session, terminated by a blank
//! line. The file is opened in append mode for each write and closed when
//! the handle goes out of scope, on every exit path. It is never truncated
//! and never read back by this program.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::IntakeError;
use crate::record::PolicyRecord;

/// Writer for the flat policy ledger file
#[derive(Debug, Clone)]
pub struct PolicyStore {
    path: PathBuf,
}

impl PolicyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record block to the ledger
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Io` if the file cannot be opened or written.
    pub fn append(&self, record: &PolicyRecord) -> Result<(), IntakeError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(record.file_block().as_bytes())?;
        file.write_all(b"\n\n")?;

        tracing::info!(
            path = %self.path.display(),
            policy_number = record.policy_number,
            "Policy record appended"
        );
        Ok(())
    }
}
