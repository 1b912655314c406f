//! Draw orchestration for Chronos Oracle.
//!
//! [`Oracle`] ties the deterministic core to an insight requester: it
//! validates a request, samples and resolves it, hands the result back at
//! once, and attaches the narrative insight when the background request
//! finishes. Finished draws land in a [`SessionLog`].

pub mod config;
pub mod log;
pub mod oracle;

pub use config::OracleConfig;
pub use log::{ExportFormat, SessionLog};
pub use oracle::{Oracle, PendingDraw};
