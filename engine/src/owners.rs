//! Owner registry: the canonical set of controller identities.

use crate::error::VaultError;
use covault_types::AccountId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Insertion-ordered set of owner identities.
///
/// The order is observable (enumeration follows insertion order, with
/// removals closing the gap) and membership tests are O(1) via a parallel
/// index. Both structures are mutated together, only through
/// [`insert`](Self::insert) and [`remove`](Self::remove).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OwnerRegistry {
    order: Vec<AccountId>,
    members: HashSet<AccountId>,
}

impl OwnerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test.
    pub fn is_owner(&self, identity: &AccountId) -> bool {
        self.members.contains(identity)
    }

    /// Add an identity to the set.
    ///
    /// Fails with [`VaultError::InvalidOwner`] for the null identity and
    /// [`VaultError::AlreadyOwner`] for a current member.
    pub fn insert(&mut self, identity: AccountId) -> Result<(), VaultError> {
        if identity.is_null() {
            return Err(VaultError::InvalidOwner);
        }
        if !self.members.insert(identity.clone()) {
            return Err(VaultError::AlreadyOwner);
        }
        self.order.push(identity);
        Ok(())
    }

    /// Remove an identity from the set, preserving the order of the rest.
    ///
    /// Fails with [`VaultError::NotAnOwner`] if the identity is not a
    /// current member.
    pub fn remove(&mut self, identity: &AccountId) -> Result<(), VaultError> {
        if !self.members.remove(identity) {
            return Err(VaultError::NotAnOwner);
        }
        self.order.retain(|o| o != identity);
        Ok(())
    }

    /// Current membership size.
    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Owners in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AccountId> {
        self.order.iter()
    }
}
