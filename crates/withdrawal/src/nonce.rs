//! Versioned message nonces.
//!
//! Cross-domain message nonces carry the message encoding version in their top
//! two bytes: `nonce = version << 240 | counter`.

use alloy_primitives::U256;

const VERSION_SHIFT: usize = 240;

/// Pack a message version into the top two bytes of a nonce.
pub fn encode_versioned_nonce(nonce: U256, version: u16) -> U256 {
    nonce | (U256::from(version) << VERSION_SHIFT)
}

/// Split a versioned nonce into `(nonce, version)`.
pub fn decode_versioned_nonce(versioned: U256) -> (U256, u16) {
    let mask = (U256::from(1) << VERSION_SHIFT) - U256::from(1);
    let version = (versioned >> VERSION_SHIFT).to::<u16>();
    (versioned & mask, version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_versioned_nonce_layout() {
        let nonce = encode_versioned_nonce(U256::from(0x818), 1);
        assert_eq!(
            nonce,
            U256::from_be_bytes(hex!(
                "0001000000000000000000000000000000000000000000000000000000000818"
            ))
        );
    }

    #[test]
    fn test_versioned_nonce_round_trip() {
        for (counter, version) in [(0u64, 0u16), (110_525, 0), (5, 1), (u64::MAX, u16::MAX)] {
            let versioned = encode_versioned_nonce(U256::from(counter), version);
            assert_eq!(
                decode_versioned_nonce(versioned),
                (U256::from(counter), version)
            );
        }
    }

    #[test]
    fn test_unversioned_nonce_is_version_zero() {
        let (nonce, version) = decode_versioned_nonce(U256::from(110_525));
        assert_eq!(nonce, U256::from(110_525));
        assert_eq!(version, 0);
    }
}
