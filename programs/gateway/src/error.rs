//! Gateway errors

use anchor_lang::prelude::*;
use bridge_common::{Classify, ErrorKind};

#[error_code(offset = 6200)]
pub enum GatewayError {
    #[msg("The bridge is paused")]
    BridgePaused,

    #[msg("The bridge is not paused")]
    BridgeNotPaused,

    #[msg("Only the owner can perform this action")]
    OnlyOwner,

    #[msg("Only the offchain processor can perform this action")]
    OnlyOffchainProcessor,

    #[msg("Transfer fee is too high")]
    FeeTooHigh,

    #[msg("Operation fee is too high")]
    OperationFeeTooHigh,

    #[msg("Fee exceeds amount")]
    FeeExceedsAmount,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Invalid address")]
    InvalidAddress,

    #[msg("Invalid destination")]
    InvalidDestination,

    #[msg("Ledger does not match the configured token")]
    InvalidToken,

    #[msg("Holding is not the gateway's fee holding")]
    InvalidFeeHolding,

    #[msg("Holding does not belong to the signer")]
    HolderMismatch,
}

impl Classify for GatewayError {
    fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::BridgePaused | GatewayError::BridgeNotPaused => ErrorKind::State,
            GatewayError::OnlyOwner
            | GatewayError::OnlyOffchainProcessor
            | GatewayError::HolderMismatch => ErrorKind::Authorization,
            GatewayError::FeeExceedsAmount => ErrorKind::Arithmetic,
            GatewayError::FeeTooHigh
            | GatewayError::OperationFeeTooHigh
            | GatewayError::ZeroAmount
            | GatewayError::InvalidAddress
            | GatewayError::InvalidDestination
            | GatewayError::InvalidToken
            | GatewayError::InvalidFeeHolding => ErrorKind::Validation,
        }
    }
}
