//! Fundamental types for the ballot governance workspace.
//!
//! This crate defines the value types shared by every other crate:
//! account and proposal identifiers, token amounts, timestamps, the
//! construction-time parameters, and the proposal record itself.

pub mod account;
pub mod amount;
pub mod error;
pub mod id;
pub mod params;
pub mod proposal;
pub mod time;

pub use account::AccountId;
pub use amount::TokenAmount;
pub use error::TypesError;
pub use id::ProposalId;
pub use params::GovernanceParams;
pub use proposal::{Proposal, VoteRecord};
pub use time::Timestamp;
