//! Asset ledger interfaces for the covault authorization engine.
//!
//! The engine never accounts for assets itself; at execution time it calls
//! out through the [`AssetGateway`] seam to independently deployed ledgers.
//! This crate defines the three ledger traits (fungible, non-fungible,
//! multi-token), a directory that resolves asset-contract references onto
//! registered ledgers, and in-memory reference ledgers used by tests and
//! embedders.
//!
//! Every ledger operation is check-then-mutate: a failed transfer leaves
//! the ledger untouched.

pub mod error;
pub mod fungible;
pub mod gateway;
pub mod multi_token;
pub mod non_fungible;

pub use error::AssetError;
pub use fungible::{FungibleLedger, TokenLedger};
pub use gateway::{AssetDirectory, AssetGateway};
pub use multi_token::{MultiTokenBank, MultiTokenLedger};
pub use non_fungible::{NftLedger, NonFungibleLedger};
