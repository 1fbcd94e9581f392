//! Proposal storage trait.

use crate::StoreError;
use ballot_types::{Proposal, ProposalId};

/// Owns every proposal record plus the id counter.
///
/// Records are append-only: there is no delete. All mutation goes through
/// [`ProposalStore::update`], which must serialise callers touching the same
/// proposal while leaving distinct proposals uncontended.
pub trait ProposalStore {
    /// Reserve the next unused id. Ids are never handed out twice, even if
    /// the caller fails to insert a proposal under the reserved id.
    fn next_id(&self) -> Result<ProposalId, StoreError>;

    /// Store a new proposal keyed by its id.
    fn insert(&self, proposal: Proposal) -> Result<(), StoreError>;

    /// Get a snapshot of a proposal.
    fn get(&self, id: ProposalId) -> Result<Proposal, StoreError>;

    /// Apply `mutator` to the stored proposal in place, under its exclusive
    /// lock.
    ///
    /// Writes are not rolled back. A mutator that may fail must finish every
    /// check before its first write, so that an `Err` leaves the record as
    /// it was.
    fn update<T, E, F>(&self, id: ProposalId, mutator: F) -> Result<T, E>
    where
        F: FnOnce(&mut Proposal) -> Result<T, E>,
        E: From<StoreError>;

    /// All stored ids, ascending.
    fn ids(&self) -> Result<Vec<ProposalId>, StoreError>;

    /// Number of stored proposals.
    fn len(&self) -> Result<u64, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
