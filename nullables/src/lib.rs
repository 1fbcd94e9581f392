//! Nullable collaborators for the governance engine.
//!
//! The engine only sees the `Clock` and `BalanceOracle` traits. The types
//! here satisfy them with state a test or script drives directly: time moves
//! when told to, and balances change only through explicit mint, burn and
//! transfer calls.

pub mod clock;
pub mod ledger;

pub use clock::NullClock;
pub use ledger::{LedgerError, NullLedger};
