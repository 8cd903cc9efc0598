//! The vault: single-owned container for all authorization state.
//!
//! Every operation takes the caller identity explicitly and checks
//! ownership before anything else. Asset ledgers are not part of the state;
//! the transfer execute path borrows a gateway for the duration of the
//! call.

use crate::dispatch;
use crate::error::VaultError;
use crate::events::{EventNotifier, VaultEvent};
use crate::owners::OwnerRegistry;
use crate::queue::{Record, VotingQueue};
use crate::request::{OwnerChange, TransferRequest};
use covault_assets::AssetGateway;
use covault_types::{AccountId, CurrencyType, TokenAmount, TokenId};
use serde::{Deserialize, Serialize};

/// An N-of-M authorization vault.
///
/// Three independently tracked queues share one lifecycle: any owner
/// submits a record, owners confirm (or revoke their confirmation), and
/// once the confirmation count reaches the threshold any owner executes.
/// Execution flips the record's terminal flag before running its effect,
/// so a re-entrant call fails closed; a failed effect rolls the flag back
/// and leaves no partial state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vault {
    address: AccountId,
    owners: OwnerRegistry,
    threshold: u32,
    transfers: VotingQueue<TransferRequest>,
    owner_changes: VotingQueue<OwnerChange>,
    threshold_changes: VotingQueue<u32>,
    notifier: EventNotifier,
}

impl Vault {
    /// Create a vault controlled by `owners` with the given confirmation
    /// threshold. `address` is the vault's own custody account in every
    /// asset ledger.
    ///
    /// Fails if the owner list is empty, contains the null identity or a
    /// duplicate, or if the threshold is outside `1..=owners.len()`.
    pub fn new(
        address: AccountId,
        owners: impl IntoIterator<Item = AccountId>,
        threshold: u32,
    ) -> Result<Self, VaultError> {
        let mut registry = OwnerRegistry::new();
        for owner in owners {
            registry.insert(owner)?;
        }
        if registry.count() == 0 {
            return Err(VaultError::OwnersRequired);
        }
        if threshold == 0 || threshold as usize > registry.count() {
            return Err(VaultError::InvalidThreshold(threshold));
        }
        Ok(Self {
            address,
            owners: registry,
            threshold,
            transfers: VotingQueue::new(),
            owner_changes: VotingQueue::new(),
            threshold_changes: VotingQueue::new(),
            notifier: EventNotifier::new(),
        })
    }

    // ── Asset transfer queue ────────────────────────────────────────────

    /// Submit an outbound transfer for voting. `currency_tag` selects the
    /// asset interface (0 non-fungible, 1 multi-token, 2 fungible); any
    /// other tag is rejected.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_transfer(
        &mut self,
        caller: &AccountId,
        to: AccountId,
        amount: TokenAmount,
        currency_tag: u8,
        contract: AccountId,
        token: TokenId,
        data: Vec<u8>,
    ) -> Result<usize, VaultError> {
        self.require_owner(caller)?;
        let currency = CurrencyType::from_tag(currency_tag)
            .ok_or(VaultError::UnknownCurrency(currency_tag))?;
        let index = self.transfers.submit(TransferRequest {
            to: to.clone(),
            amount,
            currency,
            contract: contract.clone(),
            token,
            data,
        });
        self.notifier.emit(VaultEvent::TransferSubmitted {
            submitter: caller.clone(),
            index,
            to,
            amount,
            contract,
            currency,
        });
        Ok(index)
    }

    pub fn confirm_transfer(
        &mut self,
        caller: &AccountId,
        index: usize,
    ) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        self.transfers.confirm(caller, index)?;
        self.notifier.emit(VaultEvent::Confirmed {
            owner: caller.clone(),
            index,
        });
        Ok(())
    }

    pub fn revoke_transfer(&mut self, caller: &AccountId, index: usize) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        self.transfers.revoke(caller, index)?;
        self.notifier.emit(VaultEvent::ConfirmationRevoked {
            owner: caller.clone(),
            index,
        });
        Ok(())
    }

    /// Execute an approved transfer through the asset gateway.
    ///
    /// The executed flag commits before the gateway call; if the gateway
    /// fails, the flag rolls back and the record stays open.
    pub fn execute_transfer(
        &mut self,
        caller: &AccountId,
        index: usize,
        assets: &mut impl AssetGateway,
    ) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        let request = self
            .transfers
            .get(index)
            .ok_or(VaultError::UnknownRecord(index))?
            .payload()
            .clone();
        self.transfers.mark_executed(index, self.threshold)?;
        if let Err(e) = dispatch::dispatch(assets, &self.address, &request) {
            self.transfers.undo_executed(index);
            return Err(e);
        }
        tracing::info!(
            index,
            executor = %caller,
            currency = %request.currency,
            "transfer executed"
        );
        self.notifier.emit(VaultEvent::Executed {
            executor: caller.clone(),
            index,
        });
        Ok(())
    }

    // ── Owner change queue ──────────────────────────────────────────────

    /// Submit a membership edit for voting.
    pub fn submit_owner_change(
        &mut self,
        caller: &AccountId,
        target: AccountId,
        add: bool,
    ) -> Result<usize, VaultError> {
        self.require_owner(caller)?;
        if target.is_null() {
            return Err(VaultError::InvalidOwner);
        }
        if add && self.owners.is_owner(&target) {
            return Err(VaultError::AlreadyOwner);
        }
        if !add && !self.owners.is_owner(&target) {
            return Err(VaultError::NotAnOwner);
        }
        let index = self.owner_changes.submit(OwnerChange {
            target: target.clone(),
            add,
        });
        self.notifier.emit(VaultEvent::OwnerChangeSubmitted {
            submitter: caller.clone(),
            index,
            target,
            add,
        });
        Ok(index)
    }

    pub fn confirm_owner_change(
        &mut self,
        caller: &AccountId,
        index: usize,
    ) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        self.owner_changes.confirm(caller, index)?;
        self.notifier.emit(VaultEvent::Confirmed {
            owner: caller.clone(),
            index,
        });
        Ok(())
    }

    pub fn revoke_owner_change(
        &mut self,
        caller: &AccountId,
        index: usize,
    ) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        self.owner_changes.revoke(caller, index)?;
        self.notifier.emit(VaultEvent::ConfirmationRevoked {
            owner: caller.clone(),
            index,
        });
        Ok(())
    }

    /// Execute an approved membership edit.
    ///
    /// Removing an owner never adjusts the threshold. If the membership
    /// falls below the current threshold, every queue is locked until a
    /// lower threshold is voted through by the remaining owners, which may
    /// itself be unreachable.
    pub fn execute_owner_change(
        &mut self,
        caller: &AccountId,
        index: usize,
    ) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        let change = self
            .owner_changes
            .get(index)
            .ok_or(VaultError::UnknownRecord(index))?
            .payload()
            .clone();
        self.owner_changes.mark_executed(index, self.threshold)?;
        let effect = if change.add {
            self.owners.insert(change.target.clone())
        } else {
            self.owners.remove(&change.target)
        };
        if let Err(e) = effect {
            self.owner_changes.undo_executed(index);
            return Err(e);
        }
        if self.threshold as usize > self.owners.count() {
            tracing::warn!(
                threshold = self.threshold,
                owners = self.owners.count(),
                "threshold now exceeds membership; executes will fail until it is lowered"
            );
        }
        tracing::info!(index, executor = %caller, target = %change.target, add = change.add, "owner change executed");
        self.notifier.emit(VaultEvent::Executed {
            executor: caller.clone(),
            index,
        });
        Ok(())
    }

    // ── Threshold change queue ──────────────────────────────────────────

    /// Submit a new confirmation threshold for voting. The value must be
    /// in `1..=owner count` and differ from the current threshold.
    pub fn submit_threshold_change(
        &mut self,
        caller: &AccountId,
        new_threshold: u32,
    ) -> Result<usize, VaultError> {
        self.require_owner(caller)?;
        if new_threshold == 0
            || new_threshold as usize > self.owners.count()
            || new_threshold == self.threshold
        {
            return Err(VaultError::InvalidThreshold(new_threshold));
        }
        let index = self.threshold_changes.submit(new_threshold);
        self.notifier.emit(VaultEvent::ThresholdChangeSubmitted {
            new_threshold,
            index,
            submitter: caller.clone(),
        });
        Ok(index)
    }

    pub fn confirm_threshold_change(
        &mut self,
        caller: &AccountId,
        index: usize,
    ) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        self.threshold_changes.confirm(caller, index)?;
        self.notifier.emit(VaultEvent::Confirmed {
            owner: caller.clone(),
            index,
        });
        Ok(())
    }

    pub fn revoke_threshold_change(
        &mut self,
        caller: &AccountId,
        index: usize,
    ) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        self.threshold_changes.revoke(caller, index)?;
        self.notifier.emit(VaultEvent::ConfirmationRevoked {
            owner: caller.clone(),
            index,
        });
        Ok(())
    }

    /// Execute an approved threshold change. Bounds were validated at
    /// submit time; the new value applies unconditionally.
    pub fn execute_threshold_change(
        &mut self,
        caller: &AccountId,
        index: usize,
    ) -> Result<(), VaultError> {
        self.require_owner(caller)?;
        let new_threshold = *self
            .threshold_changes
            .get(index)
            .ok_or(VaultError::UnknownRecord(index))?
            .payload();
        self.threshold_changes.mark_executed(index, self.threshold)?;
        self.threshold = new_threshold;
        tracing::info!(index, executor = %caller, new_threshold, "threshold change executed");
        self.notifier.emit(VaultEvent::Executed {
            executor: caller.clone(),
            index,
        });
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// The vault's own custody account id.
    pub fn address(&self) -> &AccountId {
        &self.address
    }

    pub fn is_owner(&self, identity: &AccountId) -> bool {
        self.owners.is_owner(identity)
    }

    /// Owners in insertion order.
    pub fn owners(&self) -> impl Iterator<Item = &AccountId> {
        self.owners.iter()
    }

    pub fn owner_count(&self) -> usize {
        self.owners.count()
    }

    /// The current confirmation threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Number of transfer records ever submitted.
    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    pub fn transfer(&self, index: usize) -> Option<&Record<TransferRequest>> {
        self.transfers.get(index)
    }

    /// Number of owner-change records ever submitted.
    pub fn owner_change_count(&self) -> usize {
        self.owner_changes.len()
    }

    pub fn owner_change(&self, index: usize) -> Option<&Record<OwnerChange>> {
        self.owner_changes.get(index)
    }

    /// Number of threshold-change records ever submitted.
    pub fn threshold_change_count(&self) -> usize {
        self.threshold_changes.len()
    }

    pub fn threshold_change(&self, index: usize) -> Option<&Record<u32>> {
        self.threshold_changes.get(index)
    }

    /// All events emitted so far, oldest first.
    pub fn events(&self) -> &[VaultEvent] {
        self.notifier.events()
    }

    /// Consume and return the event journal.
    pub fn drain_events(&mut self) -> Vec<VaultEvent> {
        self.notifier.drain()
    }

    fn require_owner(&self, caller: &AccountId) -> Result<(), VaultError> {
        if self.owners.is_owner(caller) {
            Ok(())
        } else {
            Err(VaultError::NotOwner)
        }
    }
}

impl Vault {
    /// Serialize the full vault state to bytes.
    pub fn save_state(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }

    /// Restore a vault from serialized bytes.
    pub fn load_state(data: &[u8]) -> Result<Self, VaultError> {
        bincode::deserialize(data).map_err(|e| VaultError::Serialization(e.to_string()))
    }
}
