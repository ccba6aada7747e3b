//! End-to-end bridge scenarios on the in-memory harness

use anchor_lang::prelude::*;
use bridge_common::ErrorKind;
use bridge_sdk::BridgeEvent;
use bridge_tests::utils::{assert_kind, ETH_ADDRESS, ETH_CHAIN};
use bridge_tests::{assert_error, DeployParams, LocalBridge};
use gateway::error::GatewayError;
use governance::error::GovernanceError;
use ledger::error::LedgerError;

struct Setup {
    bridge: LocalBridge,
    alice: Pubkey,
    relay: Pubkey,
}

/// 1% transfer fee plus 1 unit per departure; Alice holds 1000.
fn setup() -> Setup {
    let relay = Pubkey::new_unique();
    let mut bridge = LocalBridge::deploy(DeployParams::default(), relay).unwrap();
    let alice = Pubkey::new_unique();
    let deployer = bridge.deployer;
    bridge.open_holding(alice).unwrap();
    bridge.transfer(deployer, alice, 1_000).unwrap();
    bridge.events.clear();

    Setup {
        bridge,
        alice,
        relay,
    }
}

#[test]
fn test_fee_split_on_departure() {
    let Setup {
        mut bridge, alice, ..
    } = setup();
    let supply_before = bridge.total_supply();

    let departure = bridge
        .approve_and_depart(alice, 100, ETH_CHAIN, ETH_ADDRESS)
        .unwrap();

    assert_eq!(departure.fee, 2);
    assert_eq!(departure.net_amount, 98);
    assert_eq!(bridge.total_supply(), supply_before - 98);
    assert_eq!(bridge.balance_of(&alice), 900);
    assert_eq!(bridge.fee_pool(), 2);
    assert_eq!(bridge.allowance(&alice, &bridge.gateway_id), 0);

    let records = bridge.departures();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].caller, alice);
    assert_eq!(records[0].amount, 100);
    assert_eq!(records[0].net_amount, 98);
    assert_eq!(records[0].destination_chain, ETH_CHAIN);
    assert_eq!(records[0].destination_address, ETH_ADDRESS);
}

#[test]
fn test_owner_departs_fee_free() {
    let Setup { mut bridge, .. } = setup();
    let operator = bridge.operator;
    let treasury = Pubkey::new_unique();
    let deployer = bridge.deployer;

    // Hand the gateway from the proxy to a directly held key
    bridge.transfer_bridge_ownership(operator, treasury).unwrap();
    bridge.accept_gateway(treasury).unwrap();
    assert_eq!(bridge.gateway.owner(), treasury);

    bridge.open_holding(treasury).unwrap();
    bridge.transfer(deployer, treasury, 500).unwrap();
    let supply_before = bridge.total_supply();

    let departure = bridge
        .approve_and_depart(treasury, 100, ETH_CHAIN, ETH_ADDRESS)
        .unwrap();

    assert_eq!(departure.fee, 0);
    assert_eq!(departure.net_amount, 100);
    assert_eq!(bridge.total_supply(), supply_before - 100);
    assert_eq!(bridge.fee_pool(), 0);
}

#[test]
fn test_non_relay_cannot_arrive() {
    let Setup {
        mut bridge, alice, ..
    } = setup();
    let stranger = Pubkey::new_unique();
    let supply_before = bridge.total_supply();
    let events_before = bridge.events.len();

    assert_kind(
        bridge.arrive(stranger, alice, 50),
        GatewayError::OnlyOffchainProcessor,
        ErrorKind::Authorization,
    );

    assert_eq!(bridge.balance_of(&alice), 1_000);
    assert_eq!(bridge.total_supply(), supply_before);
    assert_eq!(bridge.events.len(), events_before);
}

#[test]
fn test_sweep_returns_fee_pool_to_baseline() {
    let Setup {
        mut bridge, alice, ..
    } = setup();
    let operator = bridge.operator;
    let treasury = Pubkey::new_unique();
    bridge.open_holding(treasury).unwrap();
    let baseline = bridge.fee_pool();

    bridge
        .approve_and_depart(alice, 100, ETH_CHAIN, ETH_ADDRESS)
        .unwrap();
    let swept = bridge.withdraw_fees_to(operator, treasury).unwrap();

    assert_eq!(swept, 2);
    assert_eq!(bridge.balance_of(&treasury), 2);
    assert_eq!(bridge.fee_pool(), baseline);
    assert!(bridge.events.contains(&BridgeEvent::FeesWithdrawn(
        gateway::events::FeesWithdrawn {
            recipient: treasury,
            amount: 2,
        }
    )));
}

#[test]
fn test_rebinding_is_rejected() {
    let Setup { mut bridge, .. } = setup();
    let (deployer, operator) = (bridge.deployer, bridge.operator);
    let (gateway_id, proxy_id) = (bridge.gateway_id, bridge.proxy_id);
    let (other_gateway, other_proxy) = (Pubkey::new_unique(), Pubkey::new_unique());

    assert_kind(
        bridge.bind_authority(deployer, other_gateway, other_proxy),
        LedgerError::AlreadyBound,
        ErrorKind::Configuration,
    );
    assert_kind(
        bridge.bind_proxy(operator, other_gateway),
        GovernanceError::AlreadyBound,
        ErrorKind::Configuration,
    );

    assert_eq!(bridge.ledger.bridge, gateway_id);
    assert_eq!(bridge.ledger.oracle, proxy_id);
    assert_eq!(bridge.proxy.bridge, gateway_id);
}

#[test]
fn test_relay_round_trip() {
    // Origin and destination deployments share one relay identity
    let Setup {
        bridge: mut origin,
        alice,
        relay,
    } = setup();
    let mut destination = LocalBridge::deploy(DeployParams::default(), relay).unwrap();
    let bob = Pubkey::new_unique();
    destination.open_holding(bob).unwrap();
    let destination_supply = destination.total_supply();

    origin
        .approve_and_depart(alice, 250, ETH_CHAIN, ETH_ADDRESS)
        .unwrap();
    for record in origin.departures() {
        destination.arrive(relay, bob, record.net_amount).unwrap();
    }

    // 250 - (2 + 1)
    assert_eq!(destination.balance_of(&bob), 247);
    assert_eq!(destination.total_supply(), destination_supply + 247);
}

#[test]
fn test_departure_requires_allowance() {
    let Setup {
        mut bridge, alice, ..
    } = setup();
    let gateway_id = bridge.gateway_id;
    bridge.approve(alice, gateway_id, 50).unwrap();

    assert_error!(
        bridge.depart(alice, 100, ETH_CHAIN, ETH_ADDRESS),
        LedgerError::InsufficientAllowance
    );
    assert_eq!(bridge.balance_of(&alice), 1_000);
    assert_eq!(bridge.allowance(&alice, &gateway_id), 50);
}

#[test]
fn test_departure_requires_balance() {
    let Setup {
        mut bridge, alice, ..
    } = setup();

    assert_error!(
        bridge.approve_and_depart(alice, 1_001, ETH_CHAIN, ETH_ADDRESS),
        LedgerError::InsufficientBalance
    );
    assert_eq!(bridge.allowance(&alice, &bridge.gateway_id), 0);
    assert!(bridge.departures().is_empty());
}

#[test]
fn test_fee_at_least_amount_reverts_whole_departure() {
    let Setup {
        mut bridge, alice, ..
    } = setup();
    let supply_before = bridge.total_supply();

    // An amount of 1 only covers the operation fee
    assert_kind(
        bridge.approve_and_depart(alice, 1, ETH_CHAIN, ETH_ADDRESS),
        GatewayError::FeeExceedsAmount,
        ErrorKind::Arithmetic,
    );
    assert_eq!(bridge.total_supply(), supply_before);
    assert_eq!(bridge.balance_of(&alice), 1_000);

    let departure = bridge
        .approve_and_depart(alice, 2, ETH_CHAIN, ETH_ADDRESS)
        .unwrap();
    assert_eq!(departure.net_amount, 1);
}

#[test]
fn test_destination_validation() {
    let Setup {
        mut bridge, alice, ..
    } = setup();
    let too_long = "x".repeat(65);

    assert_error!(
        bridge.approve_and_depart(alice, 100, "", ETH_ADDRESS),
        GatewayError::InvalidDestination
    );
    assert_error!(
        bridge.approve_and_depart(alice, 100, ETH_CHAIN, &too_long),
        GatewayError::InvalidDestination
    );
    bridge
        .approve_and_depart(alice, 100, ETH_CHAIN, &"x".repeat(64))
        .unwrap();
}

#[test]
fn test_zero_amounts_rejected() {
    let Setup {
        mut bridge,
        alice,
        relay,
    } = setup();

    assert_kind(
        bridge.approve_and_depart(alice, 0, ETH_CHAIN, ETH_ADDRESS),
        GatewayError::ZeroAmount,
        ErrorKind::Validation,
    );
    assert_error!(bridge.arrive(relay, alice, 0), GatewayError::ZeroAmount);
}

#[test]
fn test_arrival_respects_supply_cap() {
    let Setup {
        mut bridge,
        alice,
        relay,
    } = setup();
    let headroom = bridge.ledger.max_supply - bridge.total_supply();

    assert_kind(
        bridge.arrive(relay, alice, headroom + 1),
        LedgerError::SupplyCapExceeded,
        ErrorKind::State,
    );
    bridge.arrive(relay, alice, headroom).unwrap();
    assert_eq!(bridge.total_supply(), bridge.ledger.max_supply);
}

#[test]
fn test_departures_observed_in_order() {
    let Setup {
        mut bridge, alice, ..
    } = setup();

    for amount in [100, 200, 300] {
        bridge
            .approve_and_depart(alice, amount, ETH_CHAIN, ETH_ADDRESS)
            .unwrap();
    }

    let amounts: Vec<u64> = bridge.departures().iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![100, 200, 300]);
    // 2 + 3 + 4
    assert_eq!(bridge.fee_pool(), 9);
}
