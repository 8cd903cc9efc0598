//! Payloads carried by the three voting queues.
//!
//! The threshold-change queue carries a bare `u32`; these are the two
//! structured payloads.

use covault_types::{AccountId, CurrencyType, TokenAmount, TokenId};
use serde::{Deserialize, Serialize};

/// A pending outbound asset transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Destination of the transfer.
    pub to: AccountId,
    /// Quantity to move. Ignored for non-fungible transfers.
    pub amount: TokenAmount,
    /// Which external asset interface the transfer routes to.
    pub currency: CurrencyType,
    /// The asset contract holding the vault's custody.
    pub contract: AccountId,
    /// Token id for non-fungible and multi-token transfers. Ignored for
    /// fungible transfers.
    pub token: TokenId,
    /// Auxiliary bytes forwarded on multi-token transfers.
    pub data: Vec<u8>,
}

/// A pending membership edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerChange {
    /// The identity to add or remove.
    pub target: AccountId,
    /// True to insert the target, false to remove it.
    pub add: bool,
}
