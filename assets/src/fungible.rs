//! Fungible asset ledger interface and in-memory reference ledger.

use crate::AssetError;
use covault_types::{AccountId, TokenAmount};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A fungible asset ledger, addressed by holder only.
///
/// Implementors keep their own accounting; the engine only ever moves value
/// out of its custody account and queries balances.
pub trait FungibleLedger {
    /// Move `amount` from one holder to another.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), AssetError>;

    /// Current balance of a holder. Unknown holders have a zero balance.
    fn balance_of(&self, holder: &AccountId) -> TokenAmount;
}

/// In-memory fungible ledger.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenLedger {
    balances: HashMap<AccountId, TokenAmount>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit freshly created units to a holder.
    pub fn mint(&mut self, to: &AccountId, amount: TokenAmount) {
        let balance = self.balances.entry(to.clone()).or_insert(TokenAmount::ZERO);
        *balance = *balance + amount;
    }
}

impl FungibleLedger for TokenLedger {
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), AssetError> {
        let available = self.balance_of(from);
        let remaining = available
            .checked_sub(amount)
            .ok_or(AssetError::InsufficientBalance {
                needed: amount.raw(),
                available: available.raw(),
            })?;
        self.balances.insert(from.clone(), remaining);
        let credit = self.balances.entry(to.clone()).or_insert(TokenAmount::ZERO);
        *credit = *credit + amount;
        Ok(())
    }

    fn balance_of(&self, holder: &AccountId) -> TokenAmount {
        self.balances
            .get(holder)
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }
}
