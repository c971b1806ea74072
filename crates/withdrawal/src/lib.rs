//! Canonical encoding and hashing of L2→L1 withdrawals.
//!
//! A [`Withdrawal`] can be encoded two ways:
//! - [`Withdrawal::encode`]: the Bedrock tuple encoding hashed by the
//!   `L2ToL1MessagePasser` predeploy.
//! - [`Withdrawal::encode_legacy`]: the pre-Bedrock encoding, a
//!   `passMessageToL1` call wrapping a v0 cross-domain message, followed by the
//!   message passer address.
//!
//! Both digests are Keccak-256 over the respective encoding.

pub mod encode;
pub mod error;
pub mod event;
pub mod hash;
pub mod messenger;
pub mod nonce;
pub mod types;

pub use error::EncodeError;
pub use event::verify_message_passed;
pub use hash::{compute_storage_slot, compute_withdrawal_hash, hash_bytes};
pub use messenger::{CrossDomainMessageV0, LegacyMessageEncoder};
pub use nonce::{decode_versioned_nonce, encode_versioned_nonce};
pub use types::{Withdrawal, WithdrawalHash};
