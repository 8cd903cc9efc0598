//! Events emitted on every successful state transition.

use covault_types::{AccountId, CurrencyType, TokenAmount};
use serde::{Deserialize, Serialize};

/// One structured event per successful submit/confirm/revoke/execute call.
///
/// Confirm, execute, and revoke events are shared by all three queues; the
/// record index alone identifies the record within its queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultEvent {
    TransferSubmitted {
        submitter: AccountId,
        index: usize,
        to: AccountId,
        amount: TokenAmount,
        contract: AccountId,
        currency: CurrencyType,
    },
    OwnerChangeSubmitted {
        submitter: AccountId,
        index: usize,
        target: AccountId,
        add: bool,
    },
    ThresholdChangeSubmitted {
        new_threshold: u32,
        index: usize,
        submitter: AccountId,
    },
    Confirmed {
        owner: AccountId,
        index: usize,
    },
    Executed {
        executor: AccountId,
        index: usize,
    },
    ConfirmationRevoked {
        owner: AccountId,
        index: usize,
    },
}

/// Synchronous event journal.
///
/// Emission happens exactly when the triggering call succeeds; failed calls
/// emit nothing. There is no buffering or retry; observers read the journal
/// through [`events`](Self::events) or consume it with
/// [`drain`](Self::drain).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventNotifier {
    events: Vec<VaultEvent>,
}

impl EventNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn emit(&mut self, event: VaultEvent) {
        tracing::debug!(event = ?event, "state transition");
        self.events.push(event);
    }

    /// All events emitted so far, oldest first.
    pub fn events(&self) -> &[VaultEvent] {
        &self.events
    }

    /// Consume and return the journal, oldest first.
    pub fn drain(&mut self) -> Vec<VaultEvent> {
        std::mem::take(&mut self.events)
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<&VaultEvent> {
        self.events.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_preserves_order_and_drains() {
        let mut notifier = EventNotifier::new();
        notifier.emit(VaultEvent::Confirmed {
            owner: AccountId::new("a"),
            index: 0,
        });
        notifier.emit(VaultEvent::Executed {
            executor: AccountId::new("a"),
            index: 0,
        });

        assert_eq!(notifier.events().len(), 2);
        assert!(matches!(
            notifier.last(),
            Some(VaultEvent::Executed { index: 0, .. })
        ));

        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert!(notifier.events().is_empty());
    }
}
