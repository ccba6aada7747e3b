//! Governance proxy instructions

use anchor_lang::prelude::{AccountMeta, Pubkey};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData, ToAccountMetas};

use crate::config::SdkConfig;
use crate::pda::{self, BridgeAddresses};

pub fn initialize(config: &SdkConfig, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: ::governance::accounts::Initialize {
            proxy_config: pda::proxy_config(&config.governance_program_id).0,
            owner,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: ::governance::instruction::Initialize {}.data(),
    }
}

/// Bind the proxy to this deployment's gateway config.
pub fn bind(config: &SdkConfig, owner: Pubkey) -> Instruction {
    let addresses = BridgeAddresses::derive(config);

    Instruction {
        program_id: config.governance_program_id,
        accounts: ::governance::accounts::Bind {
            proxy_config: addresses.proxy_config,
            owner,
        }
        .to_account_metas(None),
        data: ::governance::instruction::Bind {
            gateway: addresses.bridge_config,
        }
        .data(),
    }
}

fn forward(config: &SdkConfig, owner: Pubkey) -> Vec<AccountMeta> {
    let addresses = BridgeAddresses::derive(config);

    ::governance::accounts::Forward {
        proxy_config: addresses.proxy_config,
        bridge_config: addresses.bridge_config,
        owner,
        gateway_program: config.gateway_program_id,
    }
    .to_account_metas(None)
}

pub fn update_transfer_fee(config: &SdkConfig, owner: Pubkey, basis_points: u16) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: forward(config, owner),
        data: ::governance::instruction::UpdateTransferFee { basis_points }.data(),
    }
}

pub fn update_operation_fee(config: &SdkConfig, owner: Pubkey, fee: u64) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: forward(config, owner),
        data: ::governance::instruction::UpdateOperationFee { fee }.data(),
    }
}

pub fn pause_bridge(config: &SdkConfig, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: forward(config, owner),
        data: ::governance::instruction::PauseBridge {}.data(),
    }
}

pub fn unpause_bridge(config: &SdkConfig, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: forward(config, owner),
        data: ::governance::instruction::UnpauseBridge {}.data(),
    }
}

pub fn change_relay_address(config: &SdkConfig, owner: Pubkey, new_identity: Pubkey) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: forward(config, owner),
        data: ::governance::instruction::ChangeRelayAddress { new_identity }.data(),
    }
}

pub fn withdraw_fees_to(config: &SdkConfig, owner: Pubkey, recipient: Pubkey) -> Instruction {
    let addresses = BridgeAddresses::derive(config);

    Instruction {
        program_id: config.governance_program_id,
        accounts: ::governance::accounts::WithdrawFees {
            proxy_config: addresses.proxy_config,
            bridge_config: addresses.bridge_config,
            bridge_holding: addresses.bridge_holding,
            recipient_holding: addresses.holding_of(config, &recipient),
            owner,
            gateway_program: config.gateway_program_id,
            ledger_program: config.ledger_program_id,
        }
        .to_account_metas(None),
        data: ::governance::instruction::WithdrawFeesTo {}.data(),
    }
}

pub fn transfer_bridge_ownership(
    config: &SdkConfig,
    owner: Pubkey,
    new_owner: Pubkey,
) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: forward(config, owner),
        data: ::governance::instruction::TransferBridgeOwnership { new_owner }.data(),
    }
}

pub fn accept_bridge_ownership(config: &SdkConfig, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: forward(config, owner),
        data: ::governance::instruction::AcceptBridgeOwnership {}.data(),
    }
}

pub fn transfer_ownership(config: &SdkConfig, owner: Pubkey, new_owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: ::governance::accounts::UpdateProxy {
            proxy_config: pda::proxy_config(&config.governance_program_id).0,
            owner,
        }
        .to_account_metas(None),
        data: ::governance::instruction::TransferOwnership { new_owner }.data(),
    }
}

pub fn accept_ownership(config: &SdkConfig, new_owner: Pubkey) -> Instruction {
    Instruction {
        program_id: config.governance_program_id,
        accounts: ::governance::accounts::AcceptOwnership {
            proxy_config: pda::proxy_config(&config.governance_program_id).0,
            new_owner,
        }
        .to_account_metas(None),
        data: ::governance::instruction::AcceptOwnership {}.data(),
    }
}
