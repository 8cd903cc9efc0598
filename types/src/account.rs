//! Opaque account identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identity: an owner, a transfer destination, or an asset
/// contract. The engine never inspects the contents beyond equality and
/// the null check.
///
/// The empty string is the null identity, which is never a valid owner or
/// owner-change target.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account id from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The null identity.
    pub fn null() -> Self {
        Self(String::new())
    }

    /// True for the null (empty) identity.
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
