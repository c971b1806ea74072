use crate::types::WithdrawalHash;
use thiserror::Error;

/// Errors raised while building or encoding a withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// An integer field does not fit in 256 bits.
    #[error("{field} does not fit in 256 bits")]
    IntegerOverflow { field: &'static str },

    /// An address field is not exactly 20 bytes.
    #[error("{field} must be 20 bytes, got {len}")]
    InvalidAddress { field: &'static str, len: usize },

    /// The nonce carries a message version the encoder cannot produce.
    #[error("unsupported cross domain message version {version}")]
    UnsupportedNonceVersion { version: u16 },

    /// A `MessagePassed` event commits to a different hash than its fields.
    #[error("withdrawal hash mismatch: computed {computed}, emitted {emitted}")]
    HashMismatch {
        computed: WithdrawalHash,
        emitted: WithdrawalHash,
    },
}
