//! Ledger instructions

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData, ToAccountMetas};

use crate::config::SdkConfig;
use crate::pda;

pub fn initialize(
    config: &SdkConfig,
    owner: Pubkey,
    params: ::ledger::InitializeParams,
) -> Instruction {
    let program_id = config.ledger_program_id;

    Instruction {
        program_id,
        accounts: ::ledger::accounts::Initialize {
            ledger_state: pda::ledger_state(&program_id).0,
            owner_holding: pda::holding(&program_id, &owner).0,
            owner,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: ::ledger::instruction::Initialize { params }.data(),
    }
}

pub fn open_holding(config: &SdkConfig, payer: Pubkey, holder: Pubkey) -> Instruction {
    let program_id = config.ledger_program_id;

    Instruction {
        program_id,
        accounts: ::ledger::accounts::OpenHolding {
            holding: pda::holding(&program_id, &holder).0,
            payer,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: ::ledger::instruction::OpenHolding { holder }.data(),
    }
}

/// One-shot binding of mint/burn authority to a gateway identity.
pub fn bind_authority(
    config: &SdkConfig,
    owner: Pubkey,
    gateway: Pubkey,
    proxy: Pubkey,
) -> Instruction {
    let program_id = config.ledger_program_id;

    Instruction {
        program_id,
        accounts: ::ledger::accounts::BindAuthority {
            ledger_state: pda::ledger_state(&program_id).0,
            owner,
        }
        .to_account_metas(None),
        data: ::ledger::instruction::BindAuthority { gateway, proxy }.data(),
    }
}

pub fn mint(config: &SdkConfig, authority: Pubkey, holder: Pubkey, amount: u64) -> Instruction {
    let program_id = config.ledger_program_id;

    Instruction {
        program_id,
        accounts: ::ledger::accounts::MintTo {
            ledger_state: pda::ledger_state(&program_id).0,
            holding: pda::holding(&program_id, &holder).0,
            authority,
        }
        .to_account_metas(None),
        data: ::ledger::instruction::Mint { amount }.data(),
    }
}

pub fn burn_from(
    config: &SdkConfig,
    authority: Pubkey,
    holder: Pubkey,
    amount: u64,
) -> Instruction {
    let program_id = config.ledger_program_id;

    Instruction {
        program_id,
        accounts: ::ledger::accounts::BurnFrom {
            ledger_state: pda::ledger_state(&program_id).0,
            holding: pda::holding(&program_id, &holder).0,
            authority,
        }
        .to_account_metas(None),
        data: ::ledger::instruction::BurnFrom { amount }.data(),
    }
}

pub fn transfer(config: &SdkConfig, from: Pubkey, to: Pubkey, amount: u64) -> Instruction {
    let program_id = config.ledger_program_id;

    Instruction {
        program_id,
        accounts: ::ledger::accounts::Transfer {
            from_holding: pda::holding(&program_id, &from).0,
            to_holding: pda::holding(&program_id, &to).0,
            authority: from,
        }
        .to_account_metas(None),
        data: ::ledger::instruction::Transfer { amount }.data(),
    }
}

/// Set the allowance `holder` grants `spender`. Overwrites, does not add.
pub fn approve(config: &SdkConfig, holder: Pubkey, spender: Pubkey, amount: u64) -> Instruction {
    let program_id = config.ledger_program_id;

    Instruction {
        program_id,
        accounts: ::ledger::accounts::Approve {
            allowance: pda::allowance(&program_id, &holder, &spender).0,
            holder,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: ::ledger::instruction::Approve { spender, amount }.data(),
    }
}

pub fn transfer_from(
    config: &SdkConfig,
    spender: Pubkey,
    from: Pubkey,
    to: Pubkey,
    amount: u64,
) -> Instruction {
    let program_id = config.ledger_program_id;

    Instruction {
        program_id,
        accounts: ::ledger::accounts::TransferFrom {
            allowance: pda::allowance(&program_id, &from, &spender).0,
            from_holding: pda::holding(&program_id, &from).0,
            to_holding: pda::holding(&program_id, &to).0,
            spender,
        }
        .to_account_metas(None),
        data: ::ledger::instruction::TransferFrom { amount }.data(),
    }
}
