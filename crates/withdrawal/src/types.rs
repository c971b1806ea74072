use crate::error::EncodeError;
use alloy_primitives::{Address, Bytes, B256, U256};
use binding::opstack::{IL2ToL1MessagePasser::MessagePassed, WithdrawalTransaction};
use serde::{Deserialize, Serialize};

pub type WithdrawalHash = B256;

pub(crate) const ADDRESS_LEN: usize = 20;

/// A withdrawal initiated on L2, as committed to by the message passer.
///
/// Fields are read-only once constructed. An absent `sender` or `target`
/// encodes as the zero address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    nonce: U256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sender: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<Address>,
    value: U256,
    gas_limit: U256,
    data: Bytes,
}

impl Withdrawal {
    pub fn new(
        nonce: U256,
        sender: Option<Address>,
        target: Option<Address>,
        value: U256,
        gas_limit: U256,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            nonce,
            sender,
            target,
            value,
            gas_limit,
            data: data.into(),
        }
    }

    /// Build a withdrawal from raw big-endian integers and raw address bytes.
    ///
    /// Integers may be any length as long as the value fits in 256 bits;
    /// addresses must be exactly 20 bytes.
    pub fn from_be_slices(
        nonce: &[u8],
        sender: Option<&[u8]>,
        target: Option<&[u8]>,
        value: &[u8],
        gas_limit: &[u8],
        data: impl Into<Bytes>,
    ) -> Result<Self, EncodeError> {
        Ok(Self {
            nonce: uint_from_slice("nonce", nonce)?,
            sender: sender.map(|s| address_from_slice("sender", s)).transpose()?,
            target: target.map(|t| address_from_slice("target", t)).transpose()?,
            value: uint_from_slice("value", value)?,
            gas_limit: uint_from_slice("gasLimit", gas_limit)?,
            data: data.into(),
        })
    }

    pub const fn nonce(&self) -> U256 {
        self.nonce
    }

    pub const fn sender(&self) -> Option<Address> {
        self.sender
    }

    pub const fn target(&self) -> Option<Address> {
        self.target
    }

    pub const fn value(&self) -> U256 {
        self.value
    }

    pub const fn gas_limit(&self) -> U256 {
        self.gas_limit
    }

    pub const fn data(&self) -> &Bytes {
        &self.data
    }
}

fn uint_from_slice(field: &'static str, bytes: &[u8]) -> Result<U256, EncodeError> {
    // leading zero bytes do not count towards the width
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    U256::try_from_be_slice(&bytes[start..]).ok_or(EncodeError::IntegerOverflow { field })
}

fn address_from_slice(field: &'static str, bytes: &[u8]) -> Result<Address, EncodeError> {
    if bytes.len() != ADDRESS_LEN {
        return Err(EncodeError::InvalidAddress {
            field,
            len: bytes.len(),
        });
    }
    Ok(Address::from_slice(bytes))
}

impl From<WithdrawalTransaction> for Withdrawal {
    fn from(tx: WithdrawalTransaction) -> Self {
        Self::new(
            tx.nonce,
            Some(tx.sender),
            Some(tx.target),
            tx.value,
            tx.gasLimit,
            tx.data,
        )
    }
}

impl From<&Withdrawal> for WithdrawalTransaction {
    fn from(w: &Withdrawal) -> Self {
        Self {
            nonce: w.nonce,
            sender: w.sender.unwrap_or(Address::ZERO),
            target: w.target.unwrap_or(Address::ZERO),
            value: w.value,
            gasLimit: w.gas_limit,
            data: w.data.clone(),
        }
    }
}

impl From<&MessagePassed> for Withdrawal {
    fn from(event: &MessagePassed) -> Self {
        Self::new(
            event.nonce,
            Some(event.sender),
            Some(event.target),
            event.value,
            event.gasLimit,
            event.data.clone(),
        )
    }
}
