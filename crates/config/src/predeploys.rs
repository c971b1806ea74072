//! OP Stack predeploy addresses.
//!
//! Predeploys live at fixed addresses in the `0x4200…` namespace on every OP
//! Stack chain, so they are compiled in rather than loaded at runtime.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Pre-Bedrock OVM_L2ToL1MessagePasser.
pub const LEGACY_MESSAGE_PASSER: Address = address!("0x4200000000000000000000000000000000000000");

/// Wrapped ether.
pub const WETH9: Address = address!("0x4200000000000000000000000000000000000006");

/// L2CrossDomainMessenger, the sender of every messenger-relayed withdrawal.
pub const L2_CROSS_DOMAIN_MESSENGER: Address =
    address!("0x4200000000000000000000000000000000000007");

/// L2StandardBridge.
pub const L2_STANDARD_BRIDGE: Address = address!("0x4200000000000000000000000000000000000010");

/// L2ToL1MessagePasser. Its address is appended to legacy withdrawal encodings.
pub const L2_TO_L1_MESSAGE_PASSER: Address =
    address!("0x4200000000000000000000000000000000000016");

/// Known predeploy contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predeploy {
    LegacyMessagePasser,
    Weth9,
    L2CrossDomainMessenger,
    L2StandardBridge,
    L2ToL1MessagePasser,
}

impl Predeploy {
    /// Every registered predeploy, ordered by address.
    pub const ALL: [Self; 5] = [
        Self::LegacyMessagePasser,
        Self::Weth9,
        Self::L2CrossDomainMessenger,
        Self::L2StandardBridge,
        Self::L2ToL1MessagePasser,
    ];

    /// Address the predeploy lives at.
    pub const fn address(self) -> Address {
        match self {
            Self::LegacyMessagePasser => LEGACY_MESSAGE_PASSER,
            Self::Weth9 => WETH9,
            Self::L2CrossDomainMessenger => L2_CROSS_DOMAIN_MESSENGER,
            Self::L2StandardBridge => L2_STANDARD_BRIDGE,
            Self::L2ToL1MessagePasser => L2_TO_L1_MESSAGE_PASSER,
        }
    }

    /// Contract name as used in the OP Stack deployments.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LegacyMessagePasser => "LegacyMessagePasser",
            Self::Weth9 => "WETH9",
            Self::L2CrossDomainMessenger => "L2CrossDomainMessenger",
            Self::L2StandardBridge => "L2StandardBridge",
            Self::L2ToL1MessagePasser => "L2ToL1MessagePasser",
        }
    }

    /// Reverse lookup of a predeploy by address.
    pub fn from_address(address: Address) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.address() == address)
    }
}
