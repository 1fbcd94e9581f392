//! Token-weighted governance.
//!
//! Lifecycle per proposal: Open (voting window) → Closed (window elapsed)
//! → Executed (terminal, only if quorum holds).
//!
//! Key principle: one account, one ballot per proposal, weighted by the
//! account's balance at the moment it votes. Quorum compares yes-weight
//! against a percentage of the live total supply.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod state;

pub use clock::{Clock, SystemClock};
pub use config::GovernanceConfig;
pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use oracle::BalanceOracle;
pub use state::ProposalState;
