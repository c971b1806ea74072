use crate::{
    error::EncodeError,
    types::{Withdrawal, WithdrawalHash},
};
use alloy_primitives::{keccak256, B256};
use binding::opstack::WithdrawalTransaction;

/// Keccak-256 over arbitrary bytes.
pub fn hash_bytes(bytes: impl AsRef<[u8]>) -> B256 {
    keccak256(bytes)
}

impl Withdrawal {
    /// The withdrawal hash recorded in `sentMessages` by the L2ToL1MessagePasser.
    pub fn hash(&self) -> WithdrawalHash {
        hash_bytes(self.encode())
    }

    /// The hash the OVM_L2ToL1MessagePasser computed for pre-Bedrock withdrawals.
    pub fn legacy_hash(&self) -> Result<WithdrawalHash, EncodeError> {
        let encoded = self.encode_legacy()?;
        Ok(hash_bytes(encoded))
    }
}

pub fn compute_withdrawal_hash(tx: &WithdrawalTransaction) -> WithdrawalHash {
    // Solidity's Hashing.hashWithdrawal uses:
    // keccak256(abi.encode(_tx.nonce, _tx.sender, _tx.target, _tx.value, _tx.gasLimit, _tx.data))
    Withdrawal::from(tx.clone()).hash()
}

/// Compute the storage slot for a withdrawal hash in the L2ToL1MessagePasser contract.
///
/// The storage layout is: `mapping(bytes32 => bool) public sentMessages`
/// Solidity storage slot = keccak256(key || slot_index)
/// For our mapping at slot 0: keccak256(withdrawalHash || 0)
pub fn compute_storage_slot(withdrawal_hash: WithdrawalHash) -> B256 {
    let mut data = [0u8; 64];
    data[0..32].copy_from_slice(withdrawal_hash.as_slice());
    // data[32..64] is already zeros (mapping is at slot 0)
    keccak256(data)
}
