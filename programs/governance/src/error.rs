//! Governance errors

use anchor_lang::prelude::*;
use bridge_common::{Classify, ErrorKind};

#[error_code(offset = 6300)]
pub enum GovernanceError {
    #[msg("Only the proxy owner can perform this action")]
    OnlyOwner,

    #[msg("Proxy is already bound to a gateway")]
    AlreadyBound,

    #[msg("Proxy is not bound to a gateway yet")]
    NotBound,

    #[msg("Gateway config does not match the bound gateway")]
    BridgeMismatch,

    #[msg("Invalid address")]
    InvalidAddress,
}

impl Classify for GovernanceError {
    fn kind(&self) -> ErrorKind {
        match self {
            GovernanceError::OnlyOwner => ErrorKind::Authorization,
            GovernanceError::AlreadyBound | GovernanceError::NotBound => ErrorKind::Configuration,
            GovernanceError::BridgeMismatch | GovernanceError::InvalidAddress => {
                ErrorKind::Validation
            }
        }
    }
}
