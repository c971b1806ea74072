//! Checks `MessagePassed` events against their withdrawal fields.

use crate::{
    error::EncodeError,
    types::{Withdrawal, WithdrawalHash},
};
use binding::opstack::IL2ToL1MessagePasser::MessagePassed;
use tracing::{debug, error};

/// Recompute the hash of an emitted withdrawal and compare it with the hash
/// the message passer recorded.
pub fn verify_message_passed(event: &MessagePassed) -> Result<WithdrawalHash, EncodeError> {
    let computed = Withdrawal::from(event).hash();

    if computed != event.withdrawalHash {
        error!(
            nonce = %event.nonce,
            computed_hash = %computed,
            withdrawal_hash = %event.withdrawalHash,
            "Withdrawal hash mismatch"
        );
        return Err(EncodeError::HashMismatch {
            computed,
            emitted: event.withdrawalHash,
        });
    }

    debug!(nonce = %event.nonce, withdrawal_hash = %computed, "Verified withdrawal hash");
    Ok(computed)
}
