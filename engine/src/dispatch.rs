//! Currency-type dispatch, invoked only from the transfer execute path.
//!
//! A stateless closed match over [`CurrencyType`]; the set was validated at
//! submit time, so every stored record routes somewhere. Any gateway
//! failure propagates and aborts the enclosing execute.

use crate::error::VaultError;
use crate::request::TransferRequest;
use covault_assets::AssetGateway;
use covault_types::{AccountId, CurrencyType};

pub(crate) fn dispatch(
    assets: &mut impl AssetGateway,
    custody: &AccountId,
    request: &TransferRequest,
) -> Result<(), VaultError> {
    match request.currency {
        CurrencyType::NonFungible => assets.transfer_non_fungible(
            &request.contract,
            custody,
            &request.to,
            request.token,
        )?,
        CurrencyType::MultiToken => assets.transfer_multi_token(
            &request.contract,
            custody,
            &request.to,
            request.token,
            request.amount,
            &request.data,
        )?,
        CurrencyType::Fungible => {
            assets.transfer_fungible(&request.contract, custody, &request.to, request.amount)?
        }
    }
    Ok(())
}
