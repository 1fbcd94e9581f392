//! Core governance engine: proposal creation, weighted voting, and
//! quorum-gated execution.
//!
//! Every mutation is applied through [`ProposalStore::update`], and every
//! mutator finishes its checks before its first write. A call therefore
//! either commits in full or leaves the proposal untouched, and two callers
//! working on the same proposal are serialised.

use crate::clock::Clock;
use crate::error::GovernanceError;
use crate::oracle::BalanceOracle;
use crate::state::ProposalState;
use ballot_store::ProposalStore;
use ballot_types::{
    AccountId, GovernanceParams, Proposal, ProposalId, TokenAmount, VoteRecord,
};

/// Orchestrates proposals against a store, a balance ledger and a clock.
pub struct GovernanceEngine<S, B, C> {
    store: S,
    oracle: B,
    clock: C,
    params: GovernanceParams,
}

impl<S, B, C> GovernanceEngine<S, B, C>
where
    S: ProposalStore,
    B: BalanceOracle,
    C: Clock,
{
    pub fn new(store: S, oracle: B, clock: C, params: GovernanceParams) -> Self {
        tracing::debug!(
            voting_period_secs = params.voting_period_secs(),
            quorum_percentage = params.quorum_percentage(),
            "governance engine initialised"
        );
        Self {
            store,
            oracle,
            clock,
            params,
        }
    }

    pub fn params(&self) -> &GovernanceParams {
        &self.params
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open a new proposal on behalf of `caller`.
    ///
    /// Anyone may propose; no balance is required. Each successful call
    /// consumes a fresh id.
    pub fn create_proposal(
        &self,
        caller: &AccountId,
        description: &str,
    ) -> Result<ProposalId, GovernanceError> {
        if description.trim().is_empty() {
            return Err(GovernanceError::EmptyDescription);
        }
        let id = self.store.next_id()?;
        let created_at = self.clock.now();
        self.store
            .insert(Proposal::new(id, caller.clone(), description, created_at))?;
        tracing::info!(proposal = %id, proposer = %caller, %created_at, "proposal created");
        Ok(id)
    }

    /// Cast `caller`'s ballot on `id`, weighted by its current balance.
    ///
    /// A no ballot (`support == false`) adds nothing to the vote count but
    /// still uses up the caller's one ballot on this proposal.
    pub fn vote(
        &self,
        caller: &AccountId,
        id: ProposalId,
        support: bool,
    ) -> Result<(), GovernanceError> {
        let period = self.params.voting_period_secs();
        let weight = self.store.update(id, |p| {
            if p.executed {
                return Err(GovernanceError::AlreadyExecuted(id));
            }
            if p.has_voted(caller) {
                return Err(GovernanceError::AlreadyVoted {
                    proposal: id,
                    voter: caller.clone(),
                });
            }
            let now = self.clock.now();
            if !p.is_voting_open(period, now) {
                return Err(GovernanceError::VotingClosed {
                    proposal: id,
                    closed_at: p.voting_ends_at(period),
                });
            }
            let weight = self.oracle.balance_of(caller);
            if !self.oracle.authorized(caller, weight) {
                return Err(GovernanceError::InsufficientAuthorization {
                    account: caller.clone(),
                    amount: weight,
                });
            }
            if support {
                p.vote_count = p
                    .vote_count
                    .checked_add(weight)
                    .ok_or(GovernanceError::WeightOverflow(id))?;
            }
            p.voters.insert(
                caller.clone(),
                VoteRecord {
                    support,
                    weight,
                    cast_at: now,
                },
            );
            Ok(weight)
        })?;
        tracing::debug!(proposal = %id, voter = %caller, support, %weight, "vote recorded");
        Ok(())
    }

    /// Mark `id` executed once its window has closed and quorum holds.
    ///
    /// Quorum is measured against the live total supply on every attempt, so
    /// a call refused for quorum may succeed later if the supply shrinks.
    pub fn execute_proposal(&self, id: ProposalId) -> Result<(), GovernanceError> {
        let period = self.params.voting_period_secs();
        let outcome = self.store.update(id, |p| {
            if p.executed {
                return Err(GovernanceError::AlreadyExecuted(id));
            }
            let now = self.clock.now();
            if p.is_voting_open(period, now) {
                return Err(GovernanceError::VotingStillOpen {
                    proposal: id,
                    closes_at: p.voting_ends_at(period),
                });
            }
            let need = self.quorum();
            if p.vote_count < need {
                return Err(GovernanceError::QuorumNotReached {
                    proposal: id,
                    have: p.vote_count,
                    need,
                });
            }
            p.executed = true;
            p.executed_at = Some(now);
            Ok((p.vote_count, need))
        });

        match outcome {
            Ok((have, need)) => {
                tracing::info!(proposal = %id, votes = %have, quorum = %need, "proposal executed");
                Ok(())
            }
            Err(e @ GovernanceError::QuorumNotReached { .. }) => {
                tracing::warn!(proposal = %id, error = %e, "execution refused");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Snapshot of a proposal.
    pub fn get_proposal(&self, id: ProposalId) -> Result<Proposal, GovernanceError> {
        Ok(self.store.get(id)?)
    }

    /// Where `id` currently sits in its lifecycle.
    pub fn proposal_state(&self, id: ProposalId) -> Result<ProposalState, GovernanceError> {
        let p = self.store.get(id)?;
        Ok(ProposalState::of(
            &p,
            self.params.voting_period_secs(),
            self.clock.now(),
        ))
    }

    pub fn proposal_count(&self) -> Result<u64, GovernanceError> {
        Ok(self.store.len()?)
    }

    pub fn has_voted(&self, id: ProposalId, account: &AccountId) -> Result<bool, GovernanceError> {
        Ok(self.store.get(id)?.has_voted(account))
    }

    pub fn vote_of(
        &self,
        id: ProposalId,
        account: &AccountId,
    ) -> Result<Option<VoteRecord>, GovernanceError> {
        Ok(self.store.get(id)?.voters.get(account).copied())
    }

    /// Yes-weight needed to execute, given the supply right now.
    pub fn quorum(&self) -> TokenAmount {
        self.oracle
            .total_supply()
            .percent(self.params.quorum_percentage())
    }
}
