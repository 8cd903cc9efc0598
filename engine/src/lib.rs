//! Multi-party authorization engine.
//!
//! A group of co-equal owners jointly controls outbound asset transfers and
//! the group's own governance parameters (membership, confirmation
//! threshold). Each action is a record in one of three voting queues with a
//! submit -> confirm -> execute lifecycle; execution applies the record's
//! effect exactly once, after the confirmation count reaches the threshold.
//!
//! The three queues share one generic state machine ([`queue::VotingQueue`]);
//! only their payloads and execute effects differ. All state lives in a
//! single [`Vault`] value; asset ledgers are external collaborators reached
//! through [`covault_assets::AssetGateway`] at execution time only.

mod dispatch;
pub mod error;
pub mod events;
pub mod owners;
pub mod queue;
pub mod request;
pub mod vault;

pub use error::{ErrorKind, VaultError};
pub use events::{EventNotifier, VaultEvent};
pub use owners::OwnerRegistry;
pub use queue::{Record, VotingQueue};
pub use request::{OwnerChange, TransferRequest};
pub use vault::Vault;
