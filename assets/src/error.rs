use covault_types::{AccountId, TokenId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no asset contract registered at {0}")]
    UnknownContract(AccountId),

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("unknown token id {0}")]
    UnknownToken(TokenId),

    #[error("token {token} is not held by {holder}")]
    NotTokenHolder { token: TokenId, holder: AccountId },

    #[error("token {0} already minted")]
    TokenExists(TokenId),

    #[error("transfer rejected: {0}")]
    Rejected(String),
}
