//! In-process proposal store.
//!
//! The outer map lock is held only long enough to find or insert a record;
//! each record carries its own mutex so votes on different proposals never
//! wait on each other.
//!
//! A panic inside an update poisons only that record's mutex. Later callers
//! take the lock back and carry on with the record as the panicking mutator
//! left it.

use crate::{ProposalStore, StoreError};
use ballot_types::{Proposal, ProposalId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard};

type Slot = Arc<Mutex<Proposal>>;

/// Thread-safe in-memory [`ProposalStore`].
pub struct MemoryProposalStore {
    /// Raw value of the next id to hand out. Starts at 1.
    next: AtomicU64,
    proposals: RwLock<BTreeMap<ProposalId, Slot>>,
}

impl MemoryProposalStore {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(ProposalId::FIRST.get()),
            proposals: RwLock::new(BTreeMap::new()),
        }
    }

    fn map(&self) -> RwLockReadGuard<'_, BTreeMap<ProposalId, Slot>> {
        self.proposals.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, id: ProposalId) -> Result<Slot, StoreError> {
        self.map().get(&id).cloned().ok_or(StoreError::NotFound(id))
    }
}

impl Default for MemoryProposalStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(slot: &Mutex<Proposal>) -> MutexGuard<'_, Proposal> {
    slot.lock().unwrap_or_else(|poisoned| {
        tracing::warn!(
            proposal = %poisoned.get_ref().id,
            "recovering proposal lock after a panicked update"
        );
        slot.clear_poison();
        poisoned.into_inner()
    })
}

impl ProposalStore for MemoryProposalStore {
    fn next_id(&self) -> Result<ProposalId, StoreError> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map(ProposalId::new)
            .map_err(|_| StoreError::Backend("proposal id space exhausted".into()))
    }

    fn insert(&self, proposal: Proposal) -> Result<(), StoreError> {
        let mut map = self
            .proposals
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let id = proposal.id;
        if map.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        map.insert(id, Arc::new(Mutex::new(proposal)));
        tracing::trace!(proposal = %id, "proposal stored");
        Ok(())
    }

    fn get(&self, id: ProposalId) -> Result<Proposal, StoreError> {
        let slot = self.slot(id)?;
        let guard = lock(&slot);
        Ok(guard.clone())
    }

    fn update<T, E, F>(&self, id: ProposalId, mutator: F) -> Result<T, E>
    where
        F: FnOnce(&mut Proposal) -> Result<T, E>,
        E: From<StoreError>,
    {
        let slot = self.slot(id)?;
        let mut guard = lock(&slot);
        mutator(&mut guard)
    }

    fn ids(&self) -> Result<Vec<ProposalId>, StoreError> {
        Ok(self.map().keys().copied().collect())
    }

    fn len(&self) -> Result<u64, StoreError> {
        Ok(self.map().len() as u64)
    }
}
