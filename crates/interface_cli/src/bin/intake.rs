//! One Stop Insurance intake console
//!
//! Runs a single interactive intake session on the terminal: collects the
//! policy holder's details, coverage options, payment choice, and prior
//! claims; prints the quoted receipt; and appends the finished record to
//! `Policies.dat` in the working directory.
//!
//! The program takes no flags, environment variables, or configuration
//! files. `RUST_LOG` is honoured for the tracing filter only; log output
//! goes to stderr so the interactive prompts stay clean.

use std::io;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{IntakeConfig, IntakeSession, PolicyStore};

fn main() -> Result<()> {
    let config = IntakeConfig::default();
    init_tracing(&config.log_level);

    tracing::info!(policy_number = config.policy_number, "Starting intake session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = IntakeSession::new(stdin.lock(), stdout.lock(), config.clone());
    let record = session.run()?;

    let store = PolicyStore::new(&config.policies_path);
    store.append(&record)?;

    println!();
    println!("Policy saved to {}", config.policies_path.display());

    Ok(())
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
