use anchor_lang::prelude::*;

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyBound {
    pub gateway: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyOwnershipOffered {
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyOwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
