//! Nullable balance ledger: in-memory token balances and approvals.
//!
//! Models the fungible-token side of governance: minting, burning,
//! transfers, and the owner's approval of the engine to weigh its balance.

use ballot_governance::BalanceOracle;
use ballot_types::{AccountId, TokenAmount};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient balance for {account}: have {have}, need {need}")]
    InsufficientBalance {
        account: AccountId,
        have: TokenAmount,
        need: TokenAmount,
    },

    #[error("token supply would overflow")]
    SupplyOverflow,
}

#[derive(Default)]
struct Books {
    balances: HashMap<AccountId, TokenAmount>,
    allowances: HashMap<AccountId, TokenAmount>,
    supply: TokenAmount,
}

impl Books {
    fn balance(&self, account: &AccountId) -> TokenAmount {
        self.balances.get(account).copied().unwrap_or(TokenAmount::ZERO)
    }

    fn debit(&mut self, account: &AccountId, amount: TokenAmount) -> Result<(), LedgerError> {
        let have = self.balance(account);
        let left = have
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientBalance {
                account: account.clone(),
                have,
                need: amount,
            })?;
        self.balances.insert(account.clone(), left);
        Ok(())
    }
}

/// An in-memory token ledger for testing.
/// Thread-safe so engines built on it can be driven from several threads.
#[derive(Default)]
pub struct NullLedger {
    books: Mutex<Books>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `amount` new tokens owned by `account`.
    pub fn mint(&self, account: &AccountId, amount: TokenAmount) -> Result<(), LedgerError> {
        let mut books = self.books.lock().unwrap();
        let supply = books
            .supply
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow)?;
        let balance = books
            .balance(account)
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow)?;
        books.supply = supply;
        books.balances.insert(account.clone(), balance);
        Ok(())
    }

    /// Destroy `amount` of `account`'s tokens, shrinking total supply.
    pub fn burn(&self, account: &AccountId, amount: TokenAmount) -> Result<(), LedgerError> {
        let mut books = self.books.lock().unwrap();
        books.debit(account, amount)?;
        books.supply = books.supply.saturating_sub(amount);
        Ok(())
    }

    /// Move `amount` from one account to another. Supply is unchanged.
    pub fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        let mut books = self.books.lock().unwrap();
        books.debit(from, amount)?;
        let credited = books
            .balance(to)
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow)?;
        books.balances.insert(to.clone(), credited);
        Ok(())
    }

    /// Set how much of `owner`'s balance the engine may weigh. Replaces any
    /// previous approval.
    pub fn approve(&self, owner: &AccountId, amount: TokenAmount) {
        self.books
            .lock()
            .unwrap()
            .allowances
            .insert(owner.clone(), amount);
    }

    pub fn allowance(&self, owner: &AccountId) -> TokenAmount {
        self.books
            .lock()
            .unwrap()
            .allowances
            .get(owner)
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }
}

impl BalanceOracle for NullLedger {
    fn balance_of(&self, account: &AccountId) -> TokenAmount {
        self.books.lock().unwrap().balance(account)
    }

    fn total_supply(&self) -> TokenAmount {
        self.books.lock().unwrap().supply
    }

    fn authorized(&self, account: &AccountId, amount: TokenAmount) -> bool {
        self.allowance(account) >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(s: &str) -> AccountId {
        AccountId::parse(s).unwrap()
    }

    #[test]
    fn mint_transfer_burn_track_supply() {
        let ledger = NullLedger::new();
        let (a, b) = (account("a"), account("b"));
        ledger.mint(&a, TokenAmount::new(300)).unwrap();
        ledger.transfer(&a, &b, TokenAmount::new(100)).unwrap();
        assert_eq!(ledger.balance_of(&a), TokenAmount::new(200));
        assert_eq!(ledger.balance_of(&b), TokenAmount::new(100));
        assert_eq!(ledger.total_supply(), TokenAmount::new(300));

        ledger.burn(&a, TokenAmount::new(50)).unwrap();
        assert_eq!(ledger.total_supply(), TokenAmount::new(250));
        assert_eq!(ledger.balance_of(&a), TokenAmount::new(150));
    }

    #[test]
    fn overdraw_is_rejected_without_change() {
        let ledger = NullLedger::new();
        let (a, b) = (account("a"), account("b"));
        ledger.mint(&a, TokenAmount::new(10)).unwrap();
        assert_eq!(
            ledger.transfer(&a, &b, TokenAmount::new(11)),
            Err(LedgerError::InsufficientBalance {
                account: a.clone(),
                have: TokenAmount::new(10),
                need: TokenAmount::new(11),
            })
        );
        assert!(ledger.burn(&a, TokenAmount::new(11)).is_err());
        assert_eq!(ledger.balance_of(&a), TokenAmount::new(10));
        assert_eq!(ledger.total_supply(), TokenAmount::new(10));
    }

    #[test]
    fn authorization_follows_latest_approval() {
        let ledger = NullLedger::new();
        let a = account("a");
        assert!(ledger.authorized(&a, TokenAmount::ZERO));
        assert!(!ledger.authorized(&a, TokenAmount::new(1)));
        ledger.approve(&a, TokenAmount::new(100));
        assert!(ledger.authorized(&a, TokenAmount::new(100)));
        assert!(!ledger.authorized(&a, TokenAmount::new(101)));
        ledger.approve(&a, TokenAmount::new(5));
        assert_eq!(ledger.allowance(&a), TokenAmount::new(5));
    }
}
