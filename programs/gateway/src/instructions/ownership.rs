//! Two-step ownership transfer

use anchor_lang::prelude::*;

use super::admin::UpdateConfig;
use crate::events::{OwnershipOffered, OwnershipTransferred};
use crate::state::*;

pub fn transfer_ownership(ctx: Context<UpdateConfig>, new_owner: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .bridge_config
        .ownership
        .offer(&owner, new_owner)?;

    emit!(OwnershipOffered {
        owner,
        pending_owner: new_owner,
    });
    msg!("Gateway ownership offered to {}", new_owner);
    Ok(())
}

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [BRIDGE_CONFIG_SEED],
        bump = bridge_config.bump
    )]
    pub bridge_config: Account<'info, BridgeConfig>,

    pub new_owner: Signer<'info>,
}

pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
    let new_owner = ctx.accounts.new_owner.key();
    let previous_owner = ctx.accounts.bridge_config.ownership.accept(&new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    msg!("Gateway ownership moved from {} to {}", previous_owner, new_owner);
    Ok(())
}
