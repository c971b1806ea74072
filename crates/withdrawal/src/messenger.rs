//! Cross-domain messenger calldata.
//!
//! The L2CrossDomainMessenger relays messages by calling `relayMessage` on its
//! L1 counterpart. The calldata layout depends on the version in the message
//! nonce: version 0 is the pre-Bedrock `relayMessage(address,address,bytes,uint256)`,
//! version 1 is the Bedrock
//! `relayMessage(uint256,address,address,uint256,uint256,bytes)`.

use crate::{error::EncodeError, hash::hash_bytes, nonce::decode_versioned_nonce};
use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use binding::opstack::{ICrossDomainMessenger, ILegacyCrossDomainMessenger};

/// Builds the inner message wrapped by the legacy withdrawal encoding.
pub trait LegacyMessageEncoder {
    fn encode(
        &self,
        target: Address,
        sender: Address,
        message: &Bytes,
        nonce: U256,
    ) -> Result<Bytes, EncodeError>;
}

/// Version 0 cross-domain messages, as sent by the pre-Bedrock messenger.
///
/// The nonce is encoded as given, including any version bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossDomainMessageV0;

impl LegacyMessageEncoder for CrossDomainMessageV0 {
    fn encode(
        &self,
        target: Address,
        sender: Address,
        message: &Bytes,
        nonce: U256,
    ) -> Result<Bytes, EncodeError> {
        Ok(encode_cross_domain_message_v0(
            target,
            sender,
            message.clone(),
            nonce,
        ))
    }
}

pub fn encode_cross_domain_message_v0(
    target: Address,
    sender: Address,
    message: Bytes,
    nonce: U256,
) -> Bytes {
    ILegacyCrossDomainMessenger::relayMessageCall {
        _target: target,
        _sender: sender,
        _message: message,
        _messageNonce: nonce,
    }
    .abi_encode()
    .into()
}

pub fn encode_cross_domain_message_v1(
    nonce: U256,
    sender: Address,
    target: Address,
    value: U256,
    gas_limit: U256,
    message: Bytes,
) -> Bytes {
    ICrossDomainMessenger::relayMessageCall {
        _nonce: nonce,
        _sender: sender,
        _target: target,
        _value: value,
        _minGasLimit: gas_limit,
        _message: message,
    }
    .abi_encode()
    .into()
}

/// Encode a message with the layout selected by its nonce version.
///
/// Version 0 messages carry no value or gas limit, so those are ignored.
pub fn encode_cross_domain_message(
    nonce: U256,
    sender: Address,
    target: Address,
    value: U256,
    gas_limit: U256,
    message: Bytes,
) -> Result<Bytes, EncodeError> {
    match decode_versioned_nonce(nonce) {
        (_, 0) => Ok(encode_cross_domain_message_v0(target, sender, message, nonce)),
        (_, 1) => Ok(encode_cross_domain_message_v1(
            nonce, sender, target, value, gas_limit, message,
        )),
        (_, version) => Err(EncodeError::UnsupportedNonceVersion { version }),
    }
}

pub fn hash_cross_domain_message_v0(
    target: Address,
    sender: Address,
    message: Bytes,
    nonce: U256,
) -> B256 {
    hash_bytes(encode_cross_domain_message_v0(target, sender, message, nonce))
}

pub fn hash_cross_domain_message_v1(
    nonce: U256,
    sender: Address,
    target: Address,
    value: U256,
    gas_limit: U256,
    message: Bytes,
) -> B256 {
    hash_bytes(encode_cross_domain_message_v1(
        nonce, sender, target, value, gas_limit, message,
    ))
}
