#![allow(dead_code)]

use ballot_governance::GovernanceEngine;
use ballot_nullables::{NullClock, NullLedger};
use ballot_store::MemoryProposalStore;
use ballot_types::{AccountId, GovernanceParams, TokenAmount};
use std::sync::Arc;

pub type TestEngine = GovernanceEngine<MemoryProposalStore, Arc<NullLedger>, Arc<NullClock>>;

pub struct Harness {
    pub engine: TestEngine,
    pub ledger: Arc<NullLedger>,
    pub clock: Arc<NullClock>,
}

pub fn account(s: &str) -> AccountId {
    AccountId::parse(s).unwrap()
}

pub fn tokens(n: u128) -> TokenAmount {
    TokenAmount::new(n)
}

/// Engine with a fresh ledger and a clock starting at t=1000.
pub fn harness(voting_period_secs: u64, quorum_percentage: u8) -> Harness {
    let ledger = Arc::new(NullLedger::new());
    let clock = Arc::new(NullClock::new(1_000));
    let engine = GovernanceEngine::new(
        MemoryProposalStore::new(),
        Arc::clone(&ledger),
        Arc::clone(&clock),
        GovernanceParams::new(voting_period_secs, quorum_percentage).unwrap(),
    );
    Harness {
        engine,
        ledger,
        clock,
    }
}

impl Harness {
    /// Mint `amount` to `who` and approve the engine for all of it.
    pub fn fund(&self, who: &AccountId, amount: u128) {
        self.ledger.mint(who, tokens(amount)).unwrap();
        self.ledger.approve(who, self.ledger_balance(who));
    }

    pub fn ledger_balance(&self, who: &AccountId) -> TokenAmount {
        use ballot_governance::BalanceOracle;
        self.ledger.balance_of(who)
    }
}
