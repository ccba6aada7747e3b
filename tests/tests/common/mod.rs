//! Program-test context running the ledger, gateway and governance programs
//! with real transactions and cross-program calls.

#![allow(dead_code)]

use std::collections::HashSet;

use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::instruction::{Instruction, InstructionError};
use anchor_lang::prelude::{AccountInfo, Pubkey};
use anchor_lang::{AccountDeserialize, AccountSerialize};
use bridge_sdk::instructions::{gateway as gateway_ix, governance as governance_ix, ledger as ledger_ix};
use bridge_sdk::{parse_logs, BridgeAddresses, BridgeEvent, SdkConfig};
use bridge_tests::DeployParams;
use gateway::state::BridgeConfig;
use governance::state::ProxyConfig;
use ledger::state::{Allowance, Holding, LedgerState};
use solana_program_test::*;
use solana_sdk::{
    account::Account,
    rent::Rent,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

pub type TxResult = std::result::Result<Vec<BridgeEvent>, TransactionError>;

const FUNDING: u64 = 10_000_000_000;

// Anchor's entry ties the account slice and account lifetimes together,
// which the builtin processor signature does not.
macro_rules! anchor_processor {
    ($program:ident) => {{
        fn process(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
            let accounts = Box::leak(Box::new(accounts.to_vec()));
            $program::entry(program_id, accounts, data)
        }
        processor!(process)
    }};
}

pub struct TestContext {
    pub context: ProgramTestContext,
    pub config: SdkConfig,
    pub addresses: BridgeAddresses,
    /// Ledger owner
    pub deployer: Keypair,
    /// Proxy owner
    pub operator: Keypair,
    pub relay: Keypair,
    sent: HashSet<Signature>,
}

impl TestContext {
    /// Start the three programs with optional pre-seeded accounts.
    pub async fn start(accounts: Vec<(Pubkey, Account)>) -> Self {
        let config = SdkConfig::default();
        let mut program_test = ProgramTest::new(
            "ledger",
            config.ledger_program_id,
            anchor_processor!(ledger),
        );
        program_test.add_program("gateway", config.gateway_program_id, anchor_processor!(gateway));
        program_test.add_program(
            "governance",
            config.governance_program_id,
            anchor_processor!(governance),
        );
        for (address, account) in accounts {
            program_test.add_account(address, account);
        }

        let context = program_test.start_with_context().await;
        let mut test = Self {
            context,
            addresses: BridgeAddresses::derive(&config),
            config,
            deployer: Keypair::new(),
            operator: Keypair::new(),
            relay: Keypair::new(),
            sent: HashSet::new(),
        };

        let deployer = test.deployer.pubkey();
        let operator = test.operator.pubkey();
        test.fund(&[deployer, operator]).await;
        test
    }

    /// Run the full deployment: all three programs initialized, then both
    /// one-time bindings.
    pub async fn deployed(params: DeployParams) -> Self {
        Self::deployed_with(params, Vec::new()).await
    }

    /// Full deployment alongside extra accounts seeded at genesis.
    pub async fn deployed_with(params: DeployParams, accounts: Vec<(Pubkey, Account)>) -> Self {
        let mut test = Self::start(accounts).await;
        test.deploy(params).await.unwrap();
        test.bind().await.unwrap();
        test
    }

    pub async fn deploy(&mut self, params: DeployParams) -> TxResult {
        let deployer = self.deployer.insecure_clone();
        let operator = self.operator.insecure_clone();

        let instructions = [
            ledger_ix::initialize(
                &self.config,
                deployer.pubkey(),
                ledger::InitializeParams {
                    initial_supply: params.initial_supply,
                    max_supply: params.max_supply,
                    decimals: params.decimals,
                },
            ),
            governance_ix::initialize(&self.config, operator.pubkey()),
            gateway_ix::initialize(
                &self.config,
                deployer.pubkey(),
                gateway::InitializeParams {
                    owner: self.addresses.proxy_config,
                    offchain_processor: self.relay.pubkey(),
                    transfer_fee_basis_points: params.transfer_fee_basis_points,
                    operation_fee: params.operation_fee,
                },
            ),
        ];
        self.send(&instructions, &[&deployer, &operator]).await
    }

    pub async fn bind(&mut self) -> TxResult {
        let deployer = self.deployer.insecure_clone();
        let operator = self.operator.insecure_clone();

        let instructions = [
            ledger_ix::bind_authority(
                &self.config,
                deployer.pubkey(),
                self.addresses.bridge_config,
                self.addresses.proxy_config,
            ),
            governance_ix::bind(&self.config, operator.pubkey()),
        ];
        self.send(&instructions, &[&deployer, &operator]).await
    }

    pub async fn fund(&mut self, recipients: &[Pubkey]) {
        let payer = self.context.payer.pubkey();
        let transfers: Vec<Instruction> = recipients
            .iter()
            .map(|recipient| system_instruction::transfer(&payer, recipient, FUNDING))
            .collect();
        self.send(&transfers, &[]).await.unwrap();
    }

    /// A funded key with an open, empty ledger holding.
    pub async fn user(&mut self) -> Keypair {
        let user = Keypair::new();
        self.fund(&[user.pubkey()]).await;
        self.open_holding(&user.pubkey()).await.unwrap();
        user
    }

    /// Give `holder` `amount` out of the deployer's initial supply.
    pub async fn airdrop(&mut self, holder: &Pubkey, amount: u64) {
        let deployer = self.deployer.insecure_clone();
        let ix = ledger_ix::transfer(&self.config, deployer.pubkey(), *holder, amount);
        self.send(&[ix], &[&deployer]).await.unwrap();
    }

    pub async fn open_holding(&mut self, holder: &Pubkey) -> TxResult {
        let payer = self.context.payer.pubkey();
        let ix = ledger_ix::open_holding(&self.config, payer, *holder);
        self.send(&[ix], &[]).await
    }

    /// Approve the gateway for exactly `amount` and depart, in one transaction.
    pub async fn approve_and_depart(
        &mut self,
        depositor: &Keypair,
        amount: u64,
        destination_chain: &str,
        destination_address: &str,
    ) -> TxResult {
        let instructions = [
            ledger_ix::approve(
                &self.config,
                depositor.pubkey(),
                self.addresses.bridge_config,
                amount,
            ),
            gateway_ix::depart(
                &self.config,
                depositor.pubkey(),
                amount,
                destination_chain.to_string(),
                destination_address.to_string(),
            ),
        ];
        self.send(&instructions, &[depositor]).await
    }

    pub async fn arrive(&mut self, relay: &Keypair, recipient: &Pubkey, amount: u64) -> TxResult {
        let ix = gateway_ix::arrive(&self.config, relay.pubkey(), *recipient, amount);
        self.send(&[ix], &[relay]).await
    }

    /// Send a single instruction signed by the operator.
    pub async fn as_operator(&mut self, ix: Instruction) -> TxResult {
        let operator = self.operator.insecure_clone();
        self.send(&[ix], &[&operator]).await
    }

    /// Sign with the context payer plus `signers` and process. An identical
    /// transaction sent earlier is re-signed against a fresh blockhash.
    pub async fn send(&mut self, instructions: &[Instruction], signers: &[&Keypair]) -> TxResult {
        let payer = self.context.payer.insecure_clone();
        let mut all_signers: Vec<&Keypair> = vec![&payer];
        all_signers.extend_from_slice(signers);

        let blockhash = self.context.banks_client.get_latest_blockhash().await.unwrap();
        let mut tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            all_signers.as_slice(),
            blockhash,
        );
        if !self.sent.insert(tx.signatures[0]) {
            let blockhash = self.context.get_new_latest_blockhash().await.unwrap();
            tx = Transaction::new_signed_with_payer(
                instructions,
                Some(&payer.pubkey()),
                all_signers.as_slice(),
                blockhash,
            );
            self.sent.insert(tx.signatures[0]);
        }

        let outcome = self
            .context
            .banks_client
            .process_transaction_with_metadata(tx)
            .await
            .unwrap();
        let logs = outcome
            .metadata
            .map(|metadata| metadata.log_messages)
            .unwrap_or_default();
        outcome.result.map(|()| parse_logs(logs.as_slice()))
    }

    // ---- reads ----

    pub async fn read<T: AccountDeserialize>(&mut self, address: Pubkey) -> Option<T> {
        let account = self.context.banks_client.get_account(address).await.unwrap()?;
        Some(T::try_deserialize(&mut account.data.as_slice()).unwrap())
    }

    pub async fn balance_of(&mut self, holder: &Pubkey) -> u64 {
        let address = self.addresses.holding_of(&self.config, holder);
        self.read::<Holding>(address)
            .await
            .map_or(0, |holding| holding.amount)
    }

    pub async fn fee_pool(&mut self) -> u64 {
        let gateway_id = self.addresses.bridge_config;
        self.balance_of(&gateway_id).await
    }

    pub async fn allowance(&mut self, holder: &Pubkey) -> u64 {
        let address = self.addresses.gateway_allowance_of(&self.config, holder);
        self.read::<Allowance>(address)
            .await
            .map_or(0, |allowance| allowance.amount)
    }

    pub async fn ledger_state(&mut self) -> LedgerState {
        let address = self.addresses.ledger_state;
        self.read(address).await.unwrap()
    }

    pub async fn bridge_config(&mut self) -> BridgeConfig {
        let address = self.addresses.bridge_config;
        self.read(address).await.unwrap()
    }

    pub async fn proxy_config(&mut self) -> ProxyConfig {
        let address = self.addresses.proxy_config;
        self.read(address).await.unwrap()
    }

    pub async fn total_supply(&mut self) -> u64 {
        self.ledger_state().await.total_supply
    }
}

/// Program error code of a failed transaction.
pub fn error_code(result: TxResult) -> u32 {
    match result {
        Err(TransactionError::InstructionError(_, InstructionError::Custom(code))) => code,
        Err(other) => panic!("expected a program error, got {other:?}"),
        Ok(events) => panic!("expected a program error, succeeded with {events:?}"),
    }
}

/// Rent-exempt account owned by `owner` holding a serialized Anchor account.
pub fn anchor_account<T: AccountSerialize>(owner: Pubkey, state: &T) -> Account {
    let mut data = Vec::new();
    state.try_serialize(&mut data).unwrap();

    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner,
        executable: false,
        rent_epoch: 0,
    }
}

/// Point every meta for `from` at `to` instead.
pub fn substitute(ix: &mut Instruction, from: Pubkey, to: Pubkey) {
    for meta in ix.accounts.iter_mut().filter(|meta| meta.pubkey == from) {
        meta.pubkey = to;
    }
}
