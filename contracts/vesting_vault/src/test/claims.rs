use soroban_sdk::{symbol_short, testutils::Address as _, Address, IntoVal};

use super::{Setup, START};
use super::reentrant::{ReentrantYieldSource, ReentrantYieldSourceClient};
use crate::{VaultConfig, VaultError, VestingVault, VestingVaultClient, DEFAULT_LOCK_DURATION};

#[test]
fn claim_waits_for_maturity_then_pays_exactly() {
    let s = Setup::new();
    s.vault.deposit(&s.manager, &1_000);
    let ends = START + DEFAULT_LOCK_DURATION;

    s.set_time(ends - 1);
    assert_eq!(
        s.vault.try_claim(&s.beneficiary, &0),
        Err(Ok(VaultError::NotVestedYet))
    );
    assert_eq!(s.balance(&s.beneficiary), 0);

    s.set_time(ends);
    assert_eq!(s.vault.claim(&s.beneficiary, &0), 1_000);
    assert!(s.emitted((symbol_short!("claimed"), 0u64).into_val(&s.env)));
    assert_eq!(s.balance(&s.beneficiary), 1_000);
    assert_eq!(s.balance(&s.vault_id), 0);
    assert!(s.vault.get_vesting_position(&0).unwrap().consumed);
}

#[test]
fn second_claim_is_rejected() {
    let s = Setup::new();
    s.vault.deposit_with_lock(&s.manager, &400, &10);
    s.set_time(START + 10);

    s.vault.claim(&s.beneficiary, &0);
    assert_eq!(
        s.vault.try_claim(&s.beneficiary, &0),
        Err(Ok(VaultError::AlreadyClaimed))
    );
    assert_eq!(s.balance(&s.beneficiary), 400);
}

#[test]
fn positions_claim_in_any_order() {
    let s = Setup::new();
    s.vault.deposit(&s.manager, &500);
    s.vault.deposit(&s.manager, &700);
    s.set_time(START + DEFAULT_LOCK_DURATION);

    assert_eq!(s.vault.claim(&s.beneficiary, &1), 700);
    assert_eq!(s.vault.claim(&s.beneficiary, &0), 500);

    assert_eq!(s.balance(&s.beneficiary), 1_200);
    assert!(s.vault.get_vesting_position(&0).unwrap().consumed);
    assert!(s.vault.get_vesting_position(&1).unwrap().consumed);
}

#[test]
fn only_current_beneficiary_may_claim() {
    let s = Setup::new();
    s.vault.deposit_with_lock(&s.manager, &300, &0);

    let stranger = Address::generate(&s.env);
    assert_eq!(
        s.vault.try_claim(&stranger, &0),
        Err(Ok(VaultError::UnauthorizedBeneficiary))
    );
    assert_eq!(
        s.vault.try_claim(&s.manager, &0),
        Err(Ok(VaultError::UnauthorizedBeneficiary))
    );

    // Positions created before the change follow the new beneficiary.
    let successor = Address::generate(&s.env);
    s.vault.set_beneficiary(&s.manager, &successor);
    assert_eq!(
        s.vault.try_claim(&s.beneficiary, &0),
        Err(Ok(VaultError::UnauthorizedBeneficiary))
    );
    assert_eq!(s.vault.claim(&successor, &0), 300);
    assert_eq!(s.balance(&successor), 300);
}

#[test]
fn claim_of_unassigned_nonce_fails() {
    let s = Setup::new();
    assert_eq!(
        s.vault.try_claim(&s.beneficiary, &0),
        Err(Ok(VaultError::UnknownNonce))
    );
}

#[test]
fn claim_also_harvests_yield_to_beneficiary() {
    let s = Setup::new();
    s.vault.deposit_with_lock(&s.manager, &1_000, &100);
    s.yield_source.accrue(&s.vault_id, &42);

    s.set_time(START + 100);
    s.vault.claim(&s.beneficiary, &0);

    assert_eq!(s.reward_balance(&s.beneficiary), 42);
    assert_eq!(s.yield_source.pending(&s.vault_id), 0);
    assert_eq!(s.balance(&s.beneficiary), 1_000);
}

#[test]
fn failed_harvest_rolls_the_claim_back() {
    let s = Setup::new();
    s.vault.deposit_with_lock(&s.manager, &1_000, &100);
    s.set_time(START + 100);

    s.yield_source.set_broken(&true);
    assert_eq!(
        s.vault.try_claim(&s.beneficiary, &0),
        Err(Ok(VaultError::TransferFailed))
    );
    assert!(!s.vault.get_vesting_position(&0).unwrap().consumed);
    assert_eq!(s.balance(&s.vault_id), 1_000);

    s.yield_source.set_broken(&false);
    assert_eq!(s.vault.claim(&s.beneficiary, &0), 1_000);
}

#[test]
fn reentrant_claim_during_harvest_never_double_pays() {
    let s = Setup::new();

    // Same wiring as the regular vault, but the yield source calls back
    // into `claim` for the position being paid. The host refuses the
    // re-entry before `claim` runs, so this pins the outcome only; the
    // consumed-before-transfer ordering lives in `ClaimEngine::claim`.
    let attacker_id = s.env.register(ReentrantYieldSource, ());
    let attacker = ReentrantYieldSourceClient::new(&s.env, &attacker_id);
    let config = VaultConfig {
        yield_source: attacker_id.clone(),
        ..s.vault.config()
    };
    let vault_id = s.env.register(VestingVault, (s.beneficiary.clone(), config));
    let vault = VestingVaultClient::new(&s.env, &vault_id);

    soroban_sdk::token::TokenClient::new(&s.env, &s.asset).approve(
        &s.manager,
        &vault_id,
        &1_000,
        &(s.env.ledger().sequence() + 100),
    );
    vault.deposit_with_lock(&s.manager, &1_000, &0);
    attacker.arm(&vault_id, &s.beneficiary, &0);

    assert_eq!(vault.claim(&s.beneficiary, &0), 1_000);

    assert!(attacker.attempted());
    assert!(!attacker.succeeded());
    assert_eq!(s.balance(&s.beneficiary), 1_000);
    assert_eq!(s.balance(&vault_id), 0);
    assert!(vault.get_vesting_position(&0).unwrap().consumed);
    assert_eq!(
        vault.try_claim(&s.beneficiary, &0),
        Err(Ok(VaultError::AlreadyClaimed))
    );
}
