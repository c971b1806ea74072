//! OP Stack contract bindings.
//!
//! Includes the contracts involved in L2→L1 withdrawal hashing:
//! - L2ToL1MessagePasser (Bedrock L2 predeploy)
//! - OVM_L2ToL1MessagePasser (legacy L2 predeploy)
//! - L2CrossDomainMessenger (legacy and Bedrock `relayMessage` encodings)

use alloy_sol_types::sol;

sol! {
    /// L2ToL1MessagePasser - L2 predeploy contract for initiating withdrawals
    /// Address: 0x4200000000000000000000000000000000000016 (on all OP Stack chains)
    interface IL2ToL1MessagePasser {
        /// Emitted when a withdrawal is initiated on L2
        #[derive(Debug, PartialEq, Eq)]
        event MessagePassed(
            uint256 indexed nonce,
            address indexed sender,
            address indexed target,
            uint256 value,
            uint256 gasLimit,
            bytes data,
            bytes32 withdrawalHash
        );

        /// Initiate a withdrawal from L2 to L1
        function initiateWithdrawal(
            address _target,
            uint256 _gasLimit,
            bytes calldata _data
        ) external payable;

        /// Check if a withdrawal message has been sent
        function sentMessages(bytes32) external view returns (bool);

        /// Get the current message nonce (with version encoded in top 2 bytes)
        function messageNonce() external view returns (uint256);
    }

    /// OVM_L2ToL1MessagePasser - pre-Bedrock message passer
    /// Address: 0x4200000000000000000000000000000000000000
    interface ILegacyMessagePasser {
        /// Record a message to be relayed to L1
        function passMessageToL1(bytes calldata _message) external;
    }

    /// Pre-Bedrock L2CrossDomainMessenger (version 0 messages)
    interface ILegacyCrossDomainMessenger {
        function relayMessage(
            address _target,
            address _sender,
            bytes calldata _message,
            uint256 _messageNonce
        ) external;
    }

    /// Bedrock CrossDomainMessenger (version 1 messages)
    interface ICrossDomainMessenger {
        function relayMessage(
            uint256 _nonce,
            address _sender,
            address _target,
            uint256 _value,
            uint256 _minGasLimit,
            bytes calldata _message
        ) external payable;
    }

    /// Withdrawal transaction structure (shared across contracts)
    #[derive(Debug, PartialEq, Eq)]
    struct WithdrawalTransaction {
        uint256 nonce;
        address sender;
        address target;
        uint256 value;
        uint256 gasLimit;
        bytes data;
    }
}
