//! Scenario scripts: a JSON array of ledger, clock and governance steps
//! replayed in order against one engine.

use anyhow::{bail, Context};
use ballot_governance::{BalanceOracle, GovernanceEngine};
use ballot_nullables::{NullClock, NullLedger};
use ballot_store::MemoryProposalStore;
use ballot_types::{AccountId, GovernanceParams, ProposalId, TokenAmount};
use serde::Deserialize;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// One scripted action.
///
/// Amounts are `u64` in scripts: internally tagged enums buffer their
/// fields, and the buffer does not carry 128-bit integers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Mint {
        account: AccountId,
        amount: u64,
    },
    Burn {
        account: AccountId,
        amount: u64,
    },
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: u64,
    },
    Approve {
        owner: AccountId,
        amount: u64,
    },
    Advance {
        secs: u64,
    },
    Create {
        caller: AccountId,
        description: String,
    },
    Vote {
        caller: AccountId,
        proposal: ProposalId,
        support: bool,
    },
    Execute {
        proposal: ProposalId,
    },
    Show {
        proposal: ProposalId,
    },
}

impl Step {
    pub fn op(&self) -> &'static str {
        match self {
            Self::Mint { .. } => "mint",
            Self::Burn { .. } => "burn",
            Self::Transfer { .. } => "transfer",
            Self::Approve { .. } => "approve",
            Self::Advance { .. } => "advance",
            Self::Create { .. } => "create",
            Self::Vote { .. } => "vote",
            Self::Execute { .. } => "execute",
            Self::Show { .. } => "show",
        }
    }
}

fn tokens(amount: u64) -> TokenAmount {
    TokenAmount::new(u128::from(amount))
}

/// Read and parse a script file.
pub fn load(path: &Path) -> anyhow::Result<Vec<Step>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing script {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<Vec<Step>> {
    Ok(serde_json::from_str(text)?)
}

type ScriptEngine = GovernanceEngine<MemoryProposalStore, Arc<NullLedger>, Arc<NullClock>>;

/// An engine wired to a nullable ledger and clock the script controls.
pub struct Runner {
    engine: ScriptEngine,
    ledger: Arc<NullLedger>,
    clock: Arc<NullClock>,
}

impl Runner {
    pub fn new(params: GovernanceParams, start_secs: u64) -> Self {
        let ledger = Arc::new(NullLedger::new());
        let clock = Arc::new(NullClock::new(start_secs));
        let engine = GovernanceEngine::new(
            MemoryProposalStore::new(),
            Arc::clone(&ledger),
            Arc::clone(&clock),
            params,
        );
        Self {
            engine,
            ledger,
            clock,
        }
    }

    /// Apply one step and describe the outcome.
    pub fn apply(&self, step: &Step) -> anyhow::Result<String> {
        let line = match step {
            Step::Mint { account, amount } => {
                self.ledger.mint(account, tokens(*amount))?;
                format!("minted {amount} to {account}")
            }
            Step::Burn { account, amount } => {
                self.ledger.burn(account, tokens(*amount))?;
                format!(
                    "burned {amount} from {account} (supply {})",
                    self.ledger.total_supply()
                )
            }
            Step::Transfer { from, to, amount } => {
                self.ledger.transfer(from, to, tokens(*amount))?;
                format!("moved {amount} from {from} to {to}")
            }
            Step::Approve { owner, amount } => {
                self.ledger.approve(owner, tokens(*amount));
                format!("{owner} approved {amount}")
            }
            Step::Advance { secs } => {
                format!("clock at {}", self.clock.advance(*secs))
            }
            Step::Create {
                caller,
                description,
            } => {
                let id = self.engine.create_proposal(caller, description)?;
                format!("proposal {id} created by {caller}")
            }
            Step::Vote {
                caller,
                proposal,
                support,
            } => {
                self.engine.vote(caller, *proposal, *support)?;
                let side = if *support { "yes" } else { "no" };
                format!(
                    "{caller} voted {side} on {proposal} (yes weight {})",
                    self.engine.get_proposal(*proposal)?.vote_count
                )
            }
            Step::Execute { proposal } => {
                self.engine.execute_proposal(*proposal)?;
                format!("proposal {proposal} executed")
            }
            Step::Show { proposal } => {
                let p = self.engine.get_proposal(*proposal)?;
                let state = self.engine.proposal_state(*proposal)?;
                format!(
                    "{} [{state}] by {} at {}: {:?} yes={} no={} voters={} quorum={}",
                    p.id,
                    p.proposer,
                    p.created_at,
                    p.description,
                    p.vote_count,
                    p.against_weight(),
                    p.voter_count(),
                    self.engine.quorum()
                )
            }
        };
        Ok(line)
    }

    /// Replay `steps`, writing one line per step. Returns the number of
    /// failed steps; in strict mode the first failure aborts the run.
    pub fn run(&self, steps: &[Step], strict: bool, out: &mut impl Write) -> anyhow::Result<usize> {
        let mut failures = 0;
        for (n, step) in steps.iter().enumerate() {
            let n = n + 1;
            match self.apply(step) {
                Ok(line) => writeln!(out, "{n:>3} {:<8} ok    {line}", step.op())?,
                Err(e) => {
                    tracing::debug!(step = n, op = step.op(), error = %e, "step failed");
                    if strict {
                        bail!("step {n} ({}) failed: {e}", step.op());
                    }
                    failures += 1;
                    writeln!(out, "{n:>3} {:<8} error {e}", step.op())?;
                }
            }
        }
        Ok(failures)
    }
}
