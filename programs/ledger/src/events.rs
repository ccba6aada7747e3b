use anchor_lang::prelude::*;

/// Mint/burn authority was bound to a gateway and its governance proxy.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeDeployed {
    pub gateway: Pubkey,
    pub proxy: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensMinted {
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensBurned {
    pub account: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approved {
    pub holder: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}
