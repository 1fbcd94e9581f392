//! Derived lifecycle state of a proposal.

use ballot_types::{Proposal, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `Open -> Closed -> Executed`. Computed from the stored record and the
/// current time; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalState {
    /// Inside the voting window. Votes accepted, execution refused.
    Open,
    /// Window elapsed, not executed. Execution may be attempted.
    Closed,
    /// Terminal.
    Executed,
}

impl ProposalState {
    pub fn of(proposal: &Proposal, voting_period_secs: u64, now: Timestamp) -> Self {
        if proposal.executed {
            Self::Executed
        } else if proposal.is_voting_open(voting_period_secs, now) {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Executed => "executed",
        }
    }
}

impl fmt::Display for ProposalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
