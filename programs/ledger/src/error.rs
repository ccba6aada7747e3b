//! Ledger errors

use anchor_lang::prelude::*;
use bridge_common::{Classify, ErrorKind};

#[error_code(offset = 6100)]
pub enum LedgerError {
    #[msg("Caller is not allowed to mint or burn")]
    Unauthorized,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Mint would exceed the maximum supply")]
    SupplyCapExceeded,

    #[msg("Initial supply exceeds the maximum supply")]
    InvalidSupply,

    #[msg("Mint/burn authority is already bound")]
    AlreadyBound,

    #[msg("Invalid address")]
    InvalidAddress,

    #[msg("Source and destination holdings are the same")]
    SelfTransfer,

    #[msg("Signer does not hold this balance")]
    HolderMismatch,
}

impl Classify for LedgerError {
    fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Unauthorized | LedgerError::HolderMismatch => ErrorKind::Authorization,
            LedgerError::ZeroAmount
            | LedgerError::InvalidSupply
            | LedgerError::InvalidAddress
            | LedgerError::SelfTransfer => ErrorKind::Validation,
            LedgerError::InsufficientBalance
            | LedgerError::InsufficientAllowance
            | LedgerError::SupplyCapExceeded => ErrorKind::State,
            LedgerError::AlreadyBound => ErrorKind::Configuration,
        }
    }
}
