use anchor_lang::prelude::*;

/// Departure record consumed by the off-chain relay.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeStarted {
    pub caller: Pubkey,
    pub amount: u64,
    pub net_amount: u64,
    pub destination_chain: String,
    pub destination_address: String,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMinted {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeesWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRotated {
    pub previous: Pubkey,
    pub current: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFeeUpdated {
    pub basis_points: u16,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFeeUpdated {
    pub fee: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseChanged {
    pub paused: bool,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipOffered {
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
