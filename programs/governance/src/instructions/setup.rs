use anchor_lang::prelude::*;

use crate::events::ProxyBound;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = ProxyConfig::SIZE,
        seeds = [GOVERNANCE_SEED],
        bump
    )]
    pub proxy_config: Account<'info, ProxyConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .proxy_config
        .set_inner(ProxyConfig::new(owner, ctx.bumps.proxy_config));

    msg!("Governance proxy initialized with owner {}", owner);
    Ok(())
}

#[derive(Accounts)]
pub struct Bind<'info> {
    #[account(
        mut,
        seeds = [GOVERNANCE_SEED],
        bump = proxy_config.bump
    )]
    pub proxy_config: Account<'info, ProxyConfig>,

    pub owner: Signer<'info>,
}

/// Record the gateway this proxy administers. One-shot.
pub fn bind(ctx: Context<Bind>, gateway: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.proxy_config.bind(&owner, gateway)?;

    emit!(ProxyBound { gateway });
    msg!("Governance proxy bound to gateway {}", gateway);
    Ok(())
}
