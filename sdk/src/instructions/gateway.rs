//! Gateway instructions
//!
//! Owner-gated builders take the owner key explicitly. In a standard
//! deployment that key is the governance proxy PDA, so these are mostly
//! useful for direct-owner setups; see `instructions::governance`.

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData, ToAccountMetas};

use crate::config::SdkConfig;
use crate::pda::{self, BridgeAddresses};

pub fn initialize(
    config: &SdkConfig,
    deployer: Pubkey,
    params: ::gateway::InitializeParams,
) -> Instruction {
    let addresses = BridgeAddresses::derive(config);

    Instruction {
        program_id: config.gateway_program_id,
        accounts: ::gateway::accounts::Initialize {
            bridge_config: addresses.bridge_config,
            ledger_state: addresses.ledger_state,
            bridge_holding: addresses.bridge_holding,
            deployer,
            ledger_program: config.ledger_program_id,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: ::gateway::instruction::Initialize { params }.data(),
    }
}

/// Lock value for delivery on the paired chain. The depositor must first
/// approve the gateway identity for at least `amount`.
pub fn depart(
    config: &SdkConfig,
    depositor: Pubkey,
    amount: u64,
    destination_chain: String,
    destination_address: String,
) -> Instruction {
    let addresses = BridgeAddresses::derive(config);

    Instruction {
        program_id: config.gateway_program_id,
        accounts: ::gateway::accounts::Depart {
            bridge_config: addresses.bridge_config,
            ledger_state: addresses.ledger_state,
            depositor_holding: addresses.holding_of(config, &depositor),
            allowance: addresses.gateway_allowance_of(config, &depositor),
            bridge_holding: addresses.bridge_holding,
            depositor,
            ledger_program: config.ledger_program_id,
        }
        .to_account_metas(None),
        data: ::gateway::instruction::Depart {
            amount,
            destination_chain,
            destination_address,
        }
        .data(),
    }
}

pub fn arrive(config: &SdkConfig, relay: Pubkey, recipient: Pubkey, amount: u64) -> Instruction {
    let addresses = BridgeAddresses::derive(config);

    Instruction {
        program_id: config.gateway_program_id,
        accounts: ::gateway::accounts::Arrive {
            bridge_config: addresses.bridge_config,
            ledger_state: addresses.ledger_state,
            recipient_holding: addresses.holding_of(config, &recipient),
            offchain_processor: relay,
            ledger_program: config.ledger_program_id,
        }
        .to_account_metas(None),
        data: ::gateway::instruction::Arrive { amount }.data(),
    }
}

fn update_config(config: &SdkConfig, owner: Pubkey) -> Vec<anchor_lang::prelude::AccountMeta> {
    ::gateway::accounts::UpdateConfig {
        bridge_config: pda::bridge_config(&config.gateway_program_id).0,
        owner,
    }
    .to_account_metas(None)
}

pub fn rotate_relay(config: &SdkConfig, owner: Pubkey, new_identity: Pubkey) -> Instruction {
    Instruction {
        program_id: config.gateway_program_id,
        accounts: update_config(config, owner),
        data: ::gateway::instruction::RotateRelay { new_identity }.data(),
    }
}

pub fn set_transfer_fee(config: &SdkConfig, owner: Pubkey, basis_points: u16) -> Instruction {
    Instruction {
        program_id: config.gateway_program_id,
        accounts: update_config(config, owner),
        data: ::gateway::instruction::SetTransferFee { basis_points }.data(),
    }
}

pub fn set_operation_fee(config: &SdkConfig, owner: Pubkey, fee: u64) -> Instruction {
    Instruction {
        program_id: config.gateway_program_id,
        accounts: update_config(config, owner),
        data: ::gateway::instruction::SetOperationFee { fee }.data(),
    }
}

pub fn pause(config: &SdkConfig, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.gateway_program_id,
        accounts: update_config(config, owner),
        data: ::gateway::instruction::Pause {}.data(),
    }
}

pub fn unpause(config: &SdkConfig, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.gateway_program_id,
        accounts: update_config(config, owner),
        data: ::gateway::instruction::Unpause {}.data(),
    }
}

pub fn sweep_fees_to(config: &SdkConfig, owner: Pubkey, recipient: Pubkey) -> Instruction {
    let addresses = BridgeAddresses::derive(config);

    Instruction {
        program_id: config.gateway_program_id,
        accounts: ::gateway::accounts::SweepFees {
            bridge_config: addresses.bridge_config,
            bridge_holding: addresses.bridge_holding,
            recipient_holding: addresses.holding_of(config, &recipient),
            owner,
            ledger_program: config.ledger_program_id,
        }
        .to_account_metas(None),
        data: ::gateway::instruction::SweepFeesTo {}.data(),
    }
}

pub fn transfer_ownership(config: &SdkConfig, owner: Pubkey, new_owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.gateway_program_id,
        accounts: update_config(config, owner),
        data: ::gateway::instruction::TransferOwnership { new_owner }.data(),
    }
}

pub fn accept_ownership(config: &SdkConfig, new_owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.gateway_program_id,
        accounts: ::gateway::accounts::AcceptOwnership {
            bridge_config: pda::bridge_config(&config.gateway_program_id).0,
            new_owner,
        }
        .to_account_metas(None),
        data: ::gateway::instruction::AcceptOwnership {}.data(),
    }
}
