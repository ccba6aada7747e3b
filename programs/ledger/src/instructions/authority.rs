use anchor_lang::prelude::*;

use crate::events::BridgeDeployed;
use crate::state::*;

#[derive(Accounts)]
pub struct BindAuthority<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    pub owner: Signer<'info>,
}

/// Resolve the ledger/gateway/proxy cycle. Succeeds once.
pub fn bind_authority(ctx: Context<BindAuthority>, gateway: Pubkey, proxy: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .ledger_state
        .bind_authority(&owner, gateway, proxy)?;

    emit!(BridgeDeployed { gateway, proxy });
    msg!("Mint/burn authority bound: gateway {}, proxy {}", gateway, proxy);
    Ok(())
}
