//! Fundamental types for the covault authorization engine.
//!
//! This crate defines the core types shared by the asset boundary and the
//! voting engine: account identities, token amounts, token ids, and the
//! closed currency-type tag.

pub mod account;
pub mod amount;
pub mod currency;
pub mod token;

pub use account::AccountId;
pub use amount::TokenAmount;
pub use currency::CurrencyType;
pub use token::TokenId;
