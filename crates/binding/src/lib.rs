//! Contract bindings for the cross-domain messaging contracts.
//!
//! This crate consolidates the Solidity interfaces whose calldata and hashes
//! the withdrawal codec has to reproduce:
//! - L2ToL1MessagePasser (current and legacy OVM predeploys)
//! - L2CrossDomainMessenger (v0 and v1 `relayMessage`)
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod opstack;
