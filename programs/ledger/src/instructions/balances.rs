use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::events::{Approved, Transferred};
use crate::state::*;

#[derive(Accounts)]
pub struct Transfer<'info> {
    #[account(
        mut,
        seeds = [HOLDING_SEED, from_holding.holder.as_ref()],
        bump = from_holding.bump,
        constraint = from_holding.holder == authority.key() @ LedgerError::HolderMismatch
    )]
    pub from_holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, to_holding.holder.as_ref()],
        bump = to_holding.bump,
        constraint = to_holding.key() != from_holding.key() @ LedgerError::SelfTransfer
    )]
    pub to_holding: Account<'info, Holding>,

    pub authority: Signer<'info>,
}

pub fn transfer(ctx: Context<Transfer>, amount: u64) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    transfer_between(&mut accounts.from_holding, &mut accounts.to_holding, amount)?;

    emit!(Transferred {
        from: accounts.from_holding.holder,
        to: accounts.to_holding.holder,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(spender: Pubkey)]
pub struct Approve<'info> {
    #[account(
        init_if_needed,
        payer = holder,
        space = Allowance::SIZE,
        seeds = [ALLOWANCE_SEED, holder.key().as_ref(), spender.as_ref()],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(mut)]
    pub holder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Set (not add to) the amount `spender` may move.
pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
    require!(spender != Pubkey::default(), LedgerError::InvalidAddress);

    let holder = ctx.accounts.holder.key();
    let allowance = &mut ctx.accounts.allowance;
    allowance.holder = holder;
    allowance.spender = spender;
    allowance.amount = amount;
    allowance.bump = ctx.bumps.allowance;

    emit!(Approved {
        holder,
        spender,
        amount,
    });
    msg!("{} approved {} for {}", holder, spender, amount);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, from_holding.holder.as_ref(), spender.key().as_ref()],
        bump = allowance.bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, from_holding.holder.as_ref()],
        bump = from_holding.bump
    )]
    pub from_holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, to_holding.holder.as_ref()],
        bump = to_holding.bump,
        constraint = to_holding.key() != from_holding.key() @ LedgerError::SelfTransfer
    )]
    pub to_holding: Account<'info, Holding>,

    pub spender: Signer<'info>,
}

pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    transfer_with_allowance(
        &mut accounts.allowance,
        &mut accounts.from_holding,
        &mut accounts.to_holding,
        amount,
    )?;

    emit!(Transferred {
        from: accounts.from_holding.holder,
        to: accounts.to_holding.holder,
        amount,
    });
    Ok(())
}
