//! Multi-token asset ledger interface and in-memory reference ledger.

use crate::AssetError;
use covault_types::{AccountId, TokenAmount, TokenId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A multi-token ledger: many token ids, each with per-holder balances.
pub trait MultiTokenLedger {
    /// Move `amount` of `token` from one holder to another. `data` is an
    /// opaque auxiliary payload forwarded to the receiving contract;
    /// ledgers that have no use for it ignore it.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        token: TokenId,
        amount: TokenAmount,
        data: &[u8],
    ) -> Result<(), AssetError>;

    /// Balance of a holder for one token id.
    fn balance_of(&self, holder: &AccountId, token: TokenId) -> TokenAmount;
}

/// In-memory multi-token ledger.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MultiTokenBank {
    balances: HashMap<AccountId, HashMap<TokenId, TokenAmount>>,
}

impl MultiTokenBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit freshly created units of `token` to a holder.
    pub fn mint(&mut self, to: &AccountId, token: TokenId, amount: TokenAmount) {
        let balance = self
            .balances
            .entry(to.clone())
            .or_default()
            .entry(token)
            .or_insert(TokenAmount::ZERO);
        *balance = *balance + amount;
    }
}

impl MultiTokenLedger for MultiTokenBank {
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        token: TokenId,
        amount: TokenAmount,
        _data: &[u8],
    ) -> Result<(), AssetError> {
        let available = self.balance_of(from, token);
        let remaining = available
            .checked_sub(amount)
            .ok_or(AssetError::InsufficientBalance {
                needed: amount.raw(),
                available: available.raw(),
            })?;
        self.balances
            .entry(from.clone())
            .or_default()
            .insert(token, remaining);
        let credit = self
            .balances
            .entry(to.clone())
            .or_default()
            .entry(token)
            .or_insert(TokenAmount::ZERO);
        *credit = *credit + amount;
        Ok(())
    }

    fn balance_of(&self, holder: &AccountId, token: TokenId) -> TokenAmount {
        self.balances
            .get(holder)
            .and_then(|tokens| tokens.get(&token))
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(s: &str) -> AccountId {
        AccountId::new(s)
    }

    #[test]
    fn mint_and_transfer_per_token() {
        let mut bank = MultiTokenBank::new();
        let a = acct("a");
        let b = acct("b");
        bank.mint(&a, TokenId::new(0), TokenAmount::new(2000));

        bank.transfer(&a, &b, TokenId::new(0), TokenAmount::new(200), &[])
            .unwrap();
        assert_eq!(bank.balance_of(&a, TokenId::new(0)), TokenAmount::new(1800));
        assert_eq!(bank.balance_of(&b, TokenId::new(0)), TokenAmount::new(200));
        // Other token ids are unaffected.
        assert_eq!(bank.balance_of(&b, TokenId::new(1)), TokenAmount::ZERO);
    }

    #[test]
    fn transfer_more_than_balance_fails() {
        let mut bank = MultiTokenBank::new();
        let a = acct("a");
        let b = acct("b");
        bank.mint(&a, TokenId::new(3), TokenAmount::new(10));

        let err = bank
            .transfer(&a, &b, TokenId::new(3), TokenAmount::new(11), &[])
            .unwrap_err();
        assert!(matches!(err, AssetError::InsufficientBalance { .. }));
        assert_eq!(bank.balance_of(&a, TokenId::new(3)), TokenAmount::new(10));
    }
}
