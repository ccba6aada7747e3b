use anchor_lang::prelude::*;

use crate::events::{TokensBurned, TokensMinted};
use crate::state::*;

#[derive(Accounts)]
pub struct MintTo<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, holding.holder.as_ref()],
        bump = holding.bump
    )]
    pub holding: Account<'info, Holding>,

    /// Owner or the bound gateway
    pub authority: Signer<'info>,
}

pub fn mint(ctx: Context<MintTo>, amount: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let accounts = &mut *ctx.accounts;
    accounts
        .ledger_state
        .mint(&authority, &mut accounts.holding, amount)?;

    emit!(TokensMinted {
        to: accounts.holding.holder,
        amount,
    });
    msg!("Minted {} to {}", amount, accounts.holding.holder);
    Ok(())
}

#[derive(Accounts)]
pub struct BurnFrom<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, holding.holder.as_ref()],
        bump = holding.bump
    )]
    pub holding: Account<'info, Holding>,

    /// Owner or the bound gateway
    pub authority: Signer<'info>,
}

pub fn burn_from(ctx: Context<BurnFrom>, amount: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let accounts = &mut *ctx.accounts;
    accounts
        .ledger_state
        .burn(&authority, &mut accounts.holding, amount)?;

    emit!(TokensBurned {
        account: accounts.holding.holder,
        amount,
    });
    msg!("Burned {} from {}", amount, accounts.holding.holder);
    Ok(())
}
