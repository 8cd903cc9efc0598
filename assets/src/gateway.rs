//! Asset gateway: the seam between the engine and deployed ledgers.
//!
//! The engine resolves nothing itself: at execution time it hands the
//! asset-contract reference, the custody account, and the transfer details
//! to an [`AssetGateway`]. [`AssetDirectory`] is the standard
//! implementation, routing each call to a ledger registered under the
//! contract's account id.

use crate::{AssetError, FungibleLedger, MultiTokenLedger, NonFungibleLedger};
use covault_types::{AccountId, TokenAmount, TokenId};
use std::collections::HashMap;

/// Outbound transfer surface consumed by the engine at execution time.
pub trait AssetGateway {
    fn transfer_fungible(
        &mut self,
        contract: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), AssetError>;

    fn transfer_non_fungible(
        &mut self,
        contract: &AccountId,
        from: &AccountId,
        to: &AccountId,
        token: TokenId,
    ) -> Result<(), AssetError>;

    fn transfer_multi_token(
        &mut self,
        contract: &AccountId,
        from: &AccountId,
        to: &AccountId,
        token: TokenId,
        amount: TokenAmount,
        data: &[u8],
    ) -> Result<(), AssetError>;
}

/// Registry of deployed asset ledgers, keyed by contract account id.
///
/// A contract id may be registered under at most one asset kind; looking it
/// up under the wrong kind fails with [`AssetError::UnknownContract`].
#[derive(Default)]
pub struct AssetDirectory {
    fungible: HashMap<AccountId, Box<dyn FungibleLedger>>,
    non_fungible: HashMap<AccountId, Box<dyn NonFungibleLedger>>,
    multi_token: HashMap<AccountId, Box<dyn MultiTokenLedger>>,
}

impl AssetDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_fungible(
        &mut self,
        contract: AccountId,
        ledger: impl FungibleLedger + 'static,
    ) {
        self.fungible.insert(contract, Box::new(ledger));
    }

    pub fn register_non_fungible(
        &mut self,
        contract: AccountId,
        ledger: impl NonFungibleLedger + 'static,
    ) {
        self.non_fungible.insert(contract, Box::new(ledger));
    }

    pub fn register_multi_token(
        &mut self,
        contract: AccountId,
        ledger: impl MultiTokenLedger + 'static,
    ) {
        self.multi_token.insert(contract, Box::new(ledger));
    }

    /// The fungible ledger registered at `contract`, for balance queries.
    pub fn fungible(&self, contract: &AccountId) -> Result<&dyn FungibleLedger, AssetError> {
        self.fungible
            .get(contract)
            .map(|l| l.as_ref())
            .ok_or_else(|| AssetError::UnknownContract(contract.clone()))
    }

    /// The non-fungible ledger registered at `contract`.
    pub fn non_fungible(
        &self,
        contract: &AccountId,
    ) -> Result<&dyn NonFungibleLedger, AssetError> {
        self.non_fungible
            .get(contract)
            .map(|l| l.as_ref())
            .ok_or_else(|| AssetError::UnknownContract(contract.clone()))
    }

    /// The multi-token ledger registered at `contract`.
    pub fn multi_token(&self, contract: &AccountId) -> Result<&dyn MultiTokenLedger, AssetError> {
        self.multi_token
            .get(contract)
            .map(|l| l.as_ref())
            .ok_or_else(|| AssetError::UnknownContract(contract.clone()))
    }
}

impl AssetGateway for AssetDirectory {
    fn transfer_fungible(
        &mut self,
        contract: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), AssetError> {
        self.fungible
            .get_mut(contract)
            .ok_or_else(|| AssetError::UnknownContract(contract.clone()))?
            .transfer(from, to, amount)
    }

    fn transfer_non_fungible(
        &mut self,
        contract: &AccountId,
        from: &AccountId,
        to: &AccountId,
        token: TokenId,
    ) -> Result<(), AssetError> {
        self.non_fungible
            .get_mut(contract)
            .ok_or_else(|| AssetError::UnknownContract(contract.clone()))?
            .transfer_token(from, to, token)
    }

    fn transfer_multi_token(
        &mut self,
        contract: &AccountId,
        from: &AccountId,
        to: &AccountId,
        token: TokenId,
        amount: TokenAmount,
        data: &[u8],
    ) -> Result<(), AssetError> {
        self.multi_token
            .get_mut(contract)
            .ok_or_else(|| AssetError::UnknownContract(contract.clone()))?
            .transfer(from, to, token, amount, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MultiTokenBank, NftLedger, TokenLedger};

    fn acct(s: &str) -> AccountId {
        AccountId::new(s)
    }

    #[test]
    fn routes_to_registered_ledgers() {
        let mut directory = AssetDirectory::new();
        let erc20 = acct("token_contract");
        let vault = acct("vault");
        let dest = acct("dest");

        let mut ledger = TokenLedger::new();
        ledger.mint(&vault, TokenAmount::new(300));
        directory.register_fungible(erc20.clone(), ledger);

        directory
            .transfer_fungible(&erc20, &vault, &dest, TokenAmount::new(100))
            .unwrap();
        assert_eq!(
            directory.fungible(&erc20).unwrap().balance_of(&dest),
            TokenAmount::new(100)
        );
    }

    #[test]
    fn unknown_contract_rejected() {
        let mut directory = AssetDirectory::new();
        let err = directory
            .transfer_fungible(
                &acct("nowhere"),
                &acct("vault"),
                &acct("dest"),
                TokenAmount::new(1),
            )
            .unwrap_err();
        assert!(matches!(err, AssetError::UnknownContract(_)));
    }

    #[test]
    fn kinds_are_isolated() {
        let mut directory = AssetDirectory::new();
        let contract = acct("nft_contract");
        directory.register_non_fungible(contract.clone(), NftLedger::new());
        directory.register_multi_token(acct("mt_contract"), MultiTokenBank::new());

        // The NFT contract is not visible through the fungible surface.
        assert!(directory.fungible(&contract).is_err());
        assert!(directory.non_fungible(&contract).is_ok());
    }
}
