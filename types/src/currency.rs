//! Closed currency-type tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which external asset interface a transfer routes to.
///
/// The set is closed and validated when a transfer is submitted; dispatch at
/// execution time is an exhaustive match, never open-ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyType {
    /// Tag 0: non-fungible token, moved by token id.
    NonFungible,
    /// Tag 1: multi-token balance, moved by (token id, amount, data).
    MultiToken,
    /// Tag 2: fungible balance, moved by amount.
    Fungible,
}

impl CurrencyType {
    /// Map a raw wire tag onto the closed set. Returns `None` for any tag
    /// outside 0..=2.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::NonFungible),
            1 => Some(Self::MultiToken),
            2 => Some(Self::Fungible),
            _ => None,
        }
    }

    /// The raw wire tag.
    pub fn tag(&self) -> u8 {
        match self {
            Self::NonFungible => 0,
            Self::MultiToken => 1,
            Self::Fungible => 2,
        }
    }

    /// Human-readable name of this currency type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NonFungible => "non_fungible",
            Self::MultiToken => "multi_token",
            Self::Fungible => "fungible",
        }
    }
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
