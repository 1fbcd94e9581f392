use ballot_types::ProposalId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("proposal {0} not found")]
    NotFound(ProposalId),

    #[error("proposal {0} already exists")]
    Duplicate(ProposalId),

    #[error("storage backend error: {0}")]
    Backend(String),
}
