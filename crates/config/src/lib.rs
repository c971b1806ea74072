//! Configuration types for the withdrawal hashing system.
//!
//! This crate provides:
//! - The registry of OP Stack predeploy addresses
//! - Reverse lookup of predeploys by address

pub mod predeploys;

pub use predeploys::{
    Predeploy, L2_CROSS_DOMAIN_MESSENGER, L2_STANDARD_BRIDGE, L2_TO_L1_MESSAGE_PASSER,
    LEGACY_MESSAGE_PASSER, WETH9,
};
