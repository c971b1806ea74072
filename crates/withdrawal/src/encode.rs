//! Byte encodings of a [`Withdrawal`].
//!
//! ```text
//! v1     = nonce | sender | target | value | gasLimit | offset | len(data) | data
//! legacy = passMessageToL1(relayMessage(target, sender, data, nonce)) ++ L2ToL1MessagePasser
//! ```

use crate::{
    error::EncodeError,
    messenger::{CrossDomainMessageV0, LegacyMessageEncoder},
    types::{Withdrawal, ADDRESS_LEN},
};
use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{SolCall, SolValue};
use binding::opstack::ILegacyMessagePasser;
use config::L2_TO_L1_MESSAGE_PASSER;
use tracing::debug;

impl Withdrawal {
    /// Encode as `abi.encode(nonce, sender, target, value, gasLimit, data)`.
    ///
    /// This is the preimage hashed by `Hashing.hashWithdrawal`.
    pub fn encode(&self) -> Bytes {
        // abi_encode_sequence encodes the fields directly, without the outer
        // tuple offset that abi_encode would add for a dynamic tuple
        (
            self.nonce(),
            self.sender_word(),
            self.target_word(),
            self.value(),
            self.gas_limit(),
            self.data(),
        )
            .abi_encode_sequence()
            .into()
    }

    /// Encode in the pre-Bedrock format using a v0 cross-domain message.
    pub fn encode_legacy(&self) -> Result<Bytes, EncodeError> {
        self.encode_legacy_with(&CrossDomainMessageV0)
    }

    /// Encode in the pre-Bedrock format with a custom inner message encoder.
    pub fn encode_legacy_with<E>(&self, encoder: &E) -> Result<Bytes, EncodeError>
    where
        E: LegacyMessageEncoder + ?Sized,
    {
        let message = encoder.encode(
            self.target_word(),
            self.sender_word(),
            self.data(),
            self.nonce(),
        )?;

        let call = ILegacyMessagePasser::passMessageToL1Call { _message: message }.abi_encode();

        let mut out = Vec::with_capacity(call.len() + ADDRESS_LEN);
        out.extend_from_slice(&call);
        // raw 20 bytes, not padded to a word
        out.extend_from_slice(L2_TO_L1_MESSAGE_PASSER.as_slice());

        debug!(
            nonce = %self.nonce(),
            encoded_len = out.len(),
            "Encoded legacy withdrawal"
        );

        Ok(out.into())
    }

    // An absent address is the zero address on the wire.
    fn sender_word(&self) -> Address {
        self.sender().unwrap_or(Address::ZERO)
    }

    fn target_word(&self) -> Address {
        self.target().unwrap_or(Address::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex, U256};

    fn sample() -> Withdrawal {
        Withdrawal::new(
            U256::from(110_525),
            Some(address!("4200000000000000000000000000000000000010")),
            Some(address!("99c9fc46f92e8a1c0dec1b1747d010903e884be1")),
            U256::from(3),
            U256::from(200_000),
            Bytes::from(hex!("a9f9e675")),
        )
    }

    #[test]
    fn test_encode_zero_withdrawal_layout() {
        let w = Withdrawal::new(U256::ZERO, None, None, U256::ZERO, U256::ZERO, Bytes::new());
        let encoded = w.encode();

        let mut expected = [0u8; 224];
        expected[191] = 0xc0;
        assert_eq!(encoded.as_ref(), expected.as_slice());
    }

    #[test]
    fn test_encode_layout() {
        let w = sample();
        let encoded = w.encode();

        assert_eq!(encoded.len(), 32 * 8);
        assert_eq!(U256::from_be_slice(&encoded[0..32]), U256::from(110_525));
        assert_eq!(&encoded[32..44], &[0u8; 12]);
        assert_eq!(&encoded[44..64], w.sender().unwrap().as_slice());
        assert_eq!(&encoded[76..96], w.target().unwrap().as_slice());
        assert_eq!(U256::from_be_slice(&encoded[96..128]), U256::from(3));
        assert_eq!(U256::from_be_slice(&encoded[128..160]), U256::from(200_000));
        assert_eq!(U256::from_be_slice(&encoded[160..192]), U256::from(192));
        assert_eq!(U256::from_be_slice(&encoded[192..224]), U256::from(4));
        assert_eq!(&encoded[224..228], &hex!("a9f9e675"));
        assert!(encoded[228..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_encode_pads_data_to_word() {
        for len in [1usize, 31, 32, 33, 64, 100] {
            let w = Withdrawal::new(
                U256::ZERO,
                None,
                None,
                U256::ZERO,
                U256::ZERO,
                vec![0xff; len],
            );
            let encoded = w.encode();
            assert_eq!(encoded.len(), 224 + len.div_ceil(32) * 32);
            assert_eq!(U256::from_be_slice(&encoded[192..224]), U256::from(len));
        }
    }

    #[test]
    fn test_absent_address_encodes_as_zero() {
        let absent = Withdrawal::new(U256::from(1), None, None, U256::ZERO, U256::ZERO, Bytes::new());
        let zero = Withdrawal::new(
            U256::from(1),
            Some(Address::ZERO),
            Some(Address::ZERO),
            U256::ZERO,
            U256::ZERO,
            Bytes::new(),
        );
        assert_eq!(absent.encode(), zero.encode());
        assert_eq!(absent.encode_legacy().unwrap(), zero.encode_legacy().unwrap());
    }

    #[test]
    fn test_encode_legacy_layout() {
        let w = sample();
        let encoded = w.encode_legacy().unwrap();
        let inner = CrossDomainMessageV0
            .encode(
                w.target().unwrap(),
                w.sender().unwrap(),
                w.data(),
                w.nonce(),
            )
            .unwrap();

        assert_eq!(&encoded[..4], &hex!("cafa81dc"));
        assert_eq!(U256::from_be_slice(&encoded[4..36]), U256::from(32));
        assert_eq!(U256::from_be_slice(&encoded[36..68]), U256::from(inner.len()));
        assert_eq!(&encoded[68..68 + inner.len()], inner.as_ref());

        let padded = inner.len().div_ceil(32) * 32;
        assert_eq!(encoded.len(), 68 + padded + 20);
        assert!(encoded[68 + inner.len()..68 + padded].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_encode_legacy_address_suffix() {
        let withdrawals = [
            sample(),
            Withdrawal::new(U256::ZERO, None, None, U256::ZERO, U256::ZERO, Bytes::new()),
            Withdrawal::new(
                U256::MAX >> 16,
                Some(Address::from([0xff; 20])),
                None,
                U256::MAX,
                U256::MAX,
                vec![0xab; 333],
            ),
        ];

        for w in withdrawals {
            let encoded = w.encode_legacy().unwrap();
            assert_eq!(
                &encoded[encoded.len() - 20..],
                L2_TO_L1_MESSAGE_PASSER.as_slice()
            );
        }
    }

    #[test]
    fn test_encode_legacy_empty_data() {
        let w = Withdrawal::new(U256::ZERO, None, None, U256::ZERO, U256::ZERO, Bytes::new());
        let encoded = w.encode_legacy().unwrap();
        // selector | offset | length | inner (4 + 5 words, padded to 6) | address
        assert_eq!(encoded.len(), 4 + 32 * 2 + 32 * 6 + 20);
    }

    #[test]
    fn test_encode_legacy_propagates_encoder_error() {
        struct Failing;

        impl LegacyMessageEncoder for Failing {
            fn encode(
                &self,
                _target: Address,
                _sender: Address,
                _message: &Bytes,
                _nonce: U256,
            ) -> Result<Bytes, EncodeError> {
                Err(EncodeError::UnsupportedNonceVersion { version: 9 })
            }
        }

        let err = sample().encode_legacy_with(&Failing).unwrap_err();
        assert_eq!(err, EncodeError::UnsupportedNonceVersion { version: 9 });
    }

    #[test]
    fn test_encode_legacy_custom_encoder() {
        struct Raw;

        impl LegacyMessageEncoder for Raw {
            fn encode(
                &self,
                _target: Address,
                _sender: Address,
                message: &Bytes,
                _nonce: U256,
            ) -> Result<Bytes, EncodeError> {
                Ok(message.clone())
            }
        }

        let encoded = sample().encode_legacy_with(&Raw).unwrap();
        assert_eq!(U256::from_be_slice(&encoded[36..68]), U256::from(4));
        assert_eq!(&encoded[68..72], &hex!("a9f9e675"));
        assert_eq!(encoded.len(), 4 + 32 * 3 + 20);
    }
}
