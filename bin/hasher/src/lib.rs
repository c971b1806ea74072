pub mod config;

use ::config::Predeploy;
use alloy_primitives::{Address, Bytes, B256, U256};
use eyre::WrapErr;
use serde::Serialize;
use tracing::{debug, info};
use withdrawal::{compute_storage_slot, Withdrawal, WithdrawalHash};

/// Digests computed for a single withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashReport {
    pub nonce: U256,
    pub hash: WithdrawalHash,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_hash: Option<WithdrawalHash>,
    /// `sentMessages` slot of `hash` in the L2ToL1MessagePasser.
    pub storage_slot: B256,
}

/// Hash every withdrawal, optionally including the legacy digest.
///
/// Fails on the first withdrawal that cannot be encoded.
pub fn hash_withdrawals(withdrawals: &[Withdrawal], legacy: bool) -> eyre::Result<Vec<HashReport>> {
    withdrawals
        .iter()
        .enumerate()
        .map(|(index, w)| {
            log_withdrawal(index, w);

            let hash = w.hash();
            let legacy_hash = if legacy {
                let legacy_hash = w
                    .legacy_hash()
                    .wrap_err_with(|| format!("Failed to hash withdrawal {index} (legacy)"))?;
                Some(legacy_hash)
            } else {
                None
            };

            debug!(index, hash = %hash, legacy_hash = ?legacy_hash, "Hashed withdrawal");

            Ok(HashReport {
                nonce: w.nonce(),
                hash,
                legacy_hash,
                storage_slot: compute_storage_slot(hash),
            })
        })
        .collect()
}

/// Encode every withdrawal in either the v1 or the legacy format.
pub fn encode_withdrawals(withdrawals: &[Withdrawal], legacy: bool) -> eyre::Result<Vec<Bytes>> {
    withdrawals
        .iter()
        .enumerate()
        .map(|(index, w)| {
            log_withdrawal(index, w);

            if legacy {
                w.encode_legacy()
                    .wrap_err_with(|| format!("Failed to encode withdrawal {index} (legacy)"))
            } else {
                Ok(w.encode())
            }
        })
        .collect()
}

fn log_withdrawal(index: usize, w: &Withdrawal) {
    info!(
        index,
        nonce = %w.nonce(),
        sender = %describe(w.sender()),
        target = %describe(w.target()),
        data_len = w.data().len(),
        "Processing withdrawal"
    );
}

/// Render an address, naming it when it is a known predeploy.
pub fn describe(address: Option<Address>) -> String {
    match address {
        None => "none".to_string(),
        Some(address) => match Predeploy::from_address(address) {
            Some(predeploy) => format!("{address} ({})", predeploy.name()),
            None => address.to_string(),
        },
    }
}
