//! Two-step rotation of the proxy's own operator key

use anchor_lang::prelude::*;

use crate::error::GovernanceError;
use crate::events::{ProxyOwnershipOffered, ProxyOwnershipTransferred};
use crate::state::*;

#[derive(Accounts)]
pub struct UpdateProxy<'info> {
    #[account(
        mut,
        seeds = [GOVERNANCE_SEED],
        bump = proxy_config.bump,
        constraint = proxy_config.is_owner(&owner.key()) @ GovernanceError::OnlyOwner
    )]
    pub proxy_config: Account<'info, ProxyConfig>,

    pub owner: Signer<'info>,
}

pub fn transfer_ownership(ctx: Context<UpdateProxy>, new_owner: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .proxy_config
        .ownership
        .offer(&owner, new_owner)?;

    emit!(ProxyOwnershipOffered {
        owner,
        pending_owner: new_owner,
    });
    msg!("Proxy ownership offered to {}", new_owner);
    Ok(())
}

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [GOVERNANCE_SEED],
        bump = proxy_config.bump
    )]
    pub proxy_config: Account<'info, ProxyConfig>,

    pub new_owner: Signer<'info>,
}

pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
    let new_owner = ctx.accounts.new_owner.key();
    let previous_owner = ctx.accounts.proxy_config.ownership.accept(&new_owner)?;

    emit!(ProxyOwnershipTransferred {
        previous_owner,
        new_owner,
    });
    msg!("Proxy ownership moved from {} to {}", previous_owner, new_owner);
    Ok(())
}
