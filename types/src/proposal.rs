//! Proposal records and per-voter ballots.

use crate::{AccountId, ProposalId, Timestamp, TokenAmount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A ballot cast by one account on one proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// `true` for yes. Only yes ballots add to the proposal's vote count.
    pub support: bool,
    /// Voter's balance when the ballot was cast.
    pub weight: TokenAmount,
    pub cast_at: Timestamp,
}

/// A single governance item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub description: String,
    pub proposer: AccountId,
    pub created_at: Timestamp,
    /// Accumulated weight of yes ballots.
    pub vote_count: TokenAmount,
    pub executed: bool,
    pub executed_at: Option<Timestamp>,
    /// Every account that has voted, keyed by account. Grows only.
    pub voters: BTreeMap<AccountId, VoteRecord>,
}

impl Proposal {
    /// A fresh proposal with no votes.
    pub fn new(
        id: ProposalId,
        proposer: AccountId,
        description: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            proposer,
            created_at,
            vote_count: TokenAmount::ZERO,
            executed: false,
            executed_at: None,
            voters: BTreeMap::new(),
        }
    }

    /// First instant at which votes are no longer accepted.
    pub fn voting_ends_at(&self, voting_period_secs: u64) -> Timestamp {
        self.created_at.plus_secs(voting_period_secs)
    }

    /// Whether `now` still falls inside `[created_at, created_at + period)`.
    pub fn is_voting_open(&self, voting_period_secs: u64, now: Timestamp) -> bool {
        !self.created_at.has_expired(voting_period_secs, now)
    }

    pub fn has_voted(&self, account: &AccountId) -> bool {
        self.voters.contains_key(account)
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Total weight of the no ballots. Informational only.
    pub fn against_weight(&self) -> TokenAmount {
        self.voters
            .values()
            .filter(|v| !v.support)
            .map(|v| v.weight)
            .sum()
    }
}
