use ballot_store::StoreError;
use ballot_types::{AccountId, ProposalId, Timestamp, TokenAmount, TypesError};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("{voter} has already voted on proposal {proposal}")]
    AlreadyVoted {
        proposal: ProposalId,
        voter: AccountId,
    },

    #[error("proposal {0} has already been executed")]
    AlreadyExecuted(ProposalId),

    #[error("voting on proposal {proposal} closed at {closed_at}")]
    VotingClosed {
        proposal: ProposalId,
        closed_at: Timestamp,
    },

    #[error("voting on proposal {proposal} is open until {closes_at}")]
    VotingStillOpen {
        proposal: ProposalId,
        closes_at: Timestamp,
    },

    #[error("quorum not reached on proposal {proposal}: {have} < {need}")]
    QuorumNotReached {
        proposal: ProposalId,
        have: TokenAmount,
        need: TokenAmount,
    },

    #[error("{account} has not authorised a vote weight of {amount}")]
    InsufficientAuthorization {
        account: AccountId,
        amount: TokenAmount,
    },

    #[error("proposal id {0} issued twice")]
    DuplicateId(ProposalId),

    #[error("proposal description must not be empty")]
    EmptyDescription,

    #[error("vote count on proposal {0} would overflow")]
    WeightOverflow(ProposalId),

    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] TypesError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(String),
}

impl GovernanceError {
    /// Whether the same call may succeed later without anyone else acting.
    ///
    /// Only an early execution attempt qualifies; every other kind either
    /// needs a different call or is final.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::VotingStillOpen { .. })
    }
}

impl From<StoreError> for GovernanceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => Self::ProposalNotFound(id),
            StoreError::Duplicate(id) => Self::DuplicateId(id),
            StoreError::Backend(msg) => Self::Store(msg),
        }
    }
}
