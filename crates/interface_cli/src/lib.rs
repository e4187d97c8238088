//! Intake Console Interface
//!
//! This crate wires the domain crates into the interactive console program:
//!
//! - `config` - the immutable intake configuration (policy number, ledger
//!   path, rating table) constructed once at startup
//! - `session` - the prompting loop, generic over `BufRead`/`Write` so the
//!   whole conversation can be scripted in tests
//! - `render` - receipt and claims-table formatting
//! - `record` - the per-session `PolicyRecord` and its ledger serialization
//! - `store` - the append-only `Policies.dat` writer
//!
//! The session runs exactly once per invocation: collect, price, display,
//! persist, exit.

pub mod config;
pub mod error;
pub mod record;
pub mod render;
pub mod session;
pub mod store;

pub use config::IntakeConfig;
pub use error::IntakeError;
pub use record::PolicyRecord;
pub use session::IntakeSession;
pub use store::PolicyStore;
