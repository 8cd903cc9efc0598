//! Non-fungible asset ledger interface and in-memory reference ledger.

use crate::AssetError;
use covault_types::{AccountId, TokenId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A non-fungible asset ledger, addressed by token id.
pub trait NonFungibleLedger {
    /// Move ownership of `token` from one holder to another.
    fn transfer_token(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        token: TokenId,
    ) -> Result<(), AssetError>;

    /// Current owner of a token, if it has been minted.
    fn owner_of(&self, token: TokenId) -> Option<AccountId>;

    /// Number of tokens a holder owns.
    fn balance_of(&self, holder: &AccountId) -> u64;
}

/// In-memory non-fungible ledger.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NftLedger {
    owners: HashMap<TokenId, AccountId>,
}

impl NftLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new token to a holder. Token ids are unique for the lifetime
    /// of the ledger.
    pub fn mint(&mut self, to: &AccountId, token: TokenId) -> Result<(), AssetError> {
        if self.owners.contains_key(&token) {
            return Err(AssetError::TokenExists(token));
        }
        self.owners.insert(token, to.clone());
        Ok(())
    }
}

impl NonFungibleLedger for NftLedger {
    fn transfer_token(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        token: TokenId,
    ) -> Result<(), AssetError> {
        match self.owners.get(&token) {
            None => Err(AssetError::UnknownToken(token)),
            Some(owner) if owner != from => Err(AssetError::NotTokenHolder {
                token,
                holder: from.clone(),
            }),
            Some(_) => {
                self.owners.insert(token, to.clone());
                Ok(())
            }
        }
    }

    fn owner_of(&self, token: TokenId) -> Option<AccountId> {
        self.owners.get(&token).cloned()
    }

    fn balance_of(&self, holder: &AccountId) -> u64 {
        self.owners.values().filter(|o| *o == holder).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(s: &str) -> AccountId {
        AccountId::new(s)
    }

    #[test]
    fn mint_and_transfer_ownership() {
        let mut ledger = NftLedger::new();
        let a = acct("a");
        let b = acct("b");
        ledger.mint(&a, TokenId::new(7)).unwrap();

        assert_eq!(ledger.owner_of(TokenId::new(7)), Some(a.clone()));
        ledger.transfer_token(&a, &b, TokenId::new(7)).unwrap();
        assert_eq!(ledger.owner_of(TokenId::new(7)), Some(b.clone()));
        assert_eq!(ledger.balance_of(&a), 0);
        assert_eq!(ledger.balance_of(&b), 1);
    }

    #[test]
    fn double_mint_rejected() {
        let mut ledger = NftLedger::new();
        let a = acct("a");
        ledger.mint(&a, TokenId::new(1)).unwrap();
        assert!(matches!(
            ledger.mint(&a, TokenId::new(1)).unwrap_err(),
            AssetError::TokenExists(_)
        ));
    }

    #[test]
    fn transfer_of_unowned_token_rejected() {
        let mut ledger = NftLedger::new();
        let a = acct("a");
        let b = acct("b");
        ledger.mint(&a, TokenId::new(1)).unwrap();

        assert!(matches!(
            ledger.transfer_token(&b, &a, TokenId::new(1)).unwrap_err(),
            AssetError::NotTokenHolder { .. }
        ));
        assert!(matches!(
            ledger.transfer_token(&a, &b, TokenId::new(2)).unwrap_err(),
            AssetError::UnknownToken(_)
        ));
        // Ownership unchanged after the failed calls.
        assert_eq!(ledger.owner_of(TokenId::new(1)), Some(a));
    }
}
