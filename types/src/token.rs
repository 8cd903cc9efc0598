//! Token identifier for non-fungible and multi-token assets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a single token within a non-fungible or multi-token contract.
/// Fungible transfers ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(u128);

impl TokenId {
    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for TokenId {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}
