//! The external balance ledger, as seen by the engine.

use ballot_types::{AccountId, TokenAmount};
use std::sync::Arc;

/// Read-only view of the credential ledger.
///
/// Queries are synchronous and expected to be fast; the engine may call
/// them while holding a proposal's lock.
pub trait BalanceOracle {
    /// Current balance of `account`. Unknown accounts hold zero.
    fn balance_of(&self, account: &AccountId) -> TokenAmount;

    /// Total outstanding supply right now.
    fn total_supply(&self) -> TokenAmount;

    /// Whether `account` has authorised the engine to weigh `amount` of its
    /// balance (the ledger's approval step).
    fn authorized(&self, account: &AccountId, amount: TokenAmount) -> bool;
}

impl<T: BalanceOracle + ?Sized> BalanceOracle for Arc<T> {
    fn balance_of(&self, account: &AccountId) -> TokenAmount {
        (**self).balance_of(account)
    }

    fn total_supply(&self) -> TokenAmount {
        (**self).total_supply()
    }

    fn authorized(&self, account: &AccountId, amount: TokenAmount) -> bool {
        (**self).authorized(account, amount)
    }
}

impl<T: BalanceOracle + ?Sized> BalanceOracle for &T {
    fn balance_of(&self, account: &AccountId) -> TokenAmount {
        (**self).balance_of(account)
    }

    fn total_supply(&self) -> TokenAmount {
        (**self).total_supply()
    }

    fn authorized(&self, account: &AccountId, amount: TokenAmount) -> bool {
        (**self).authorized(account, amount)
    }
}
