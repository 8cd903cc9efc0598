use covault_assets::AssetError;
use thiserror::Error;

/// Broad classification of vault failures.
///
/// Callers that only care whether a failure was an authorization problem, a
/// malformed payload, a lifecycle conflict, or a failed effect can match on
/// this instead of individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller is not a current owner.
    Authorization,
    /// Malformed submit payload or constructor input.
    Validation,
    /// Operation incompatible with the record's current lifecycle state.
    State,
    /// Execution was refused or the external effect failed.
    Execution,
}

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("not owner")]
    NotOwner,

    #[error("at least one owner required")]
    OwnersRequired,

    #[error("currency type {0} does not exist")]
    UnknownCurrency(u8),

    #[error("invalid owner")]
    InvalidOwner,

    #[error("target is already an owner")]
    AlreadyOwner,

    #[error("target is not an owner")]
    NotAnOwner,

    #[error("invalid number of required confirmations: {0}")]
    InvalidThreshold(u32),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("record {0} does not exist")]
    UnknownRecord(usize),

    #[error("record {0} already executed")]
    AlreadyExecuted(usize),

    #[error("record {0} already confirmed")]
    AlreadyConfirmed(usize),

    #[error("record {0} not confirmed")]
    NotConfirmed(usize),

    #[error("cannot execute: {have} of {need} confirmations")]
    InsufficientConfirmations { have: u32, need: u32 },

    #[error("asset transfer failed: {0}")]
    Asset(#[from] AssetError),
}

impl VaultError {
    /// The failure class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOwner => ErrorKind::Authorization,

            Self::OwnersRequired
            | Self::UnknownCurrency(_)
            | Self::InvalidOwner
            | Self::AlreadyOwner
            | Self::NotAnOwner
            | Self::InvalidThreshold(_)
            | Self::Serialization(_) => ErrorKind::Validation,

            Self::UnknownRecord(_)
            | Self::AlreadyExecuted(_)
            | Self::AlreadyConfirmed(_)
            | Self::NotConfirmed(_) => ErrorKind::State,

            Self::InsufficientConfirmations { .. } | Self::Asset(_) => ErrorKind::Execution,
        }
    }
}
