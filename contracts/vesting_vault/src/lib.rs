#![no_std]

//! Per-beneficiary vesting vault.
//!
//! One deployed instance custodies a single asset for a single beneficiary.
//! Managers deposit under fresh lock schedules, the beneficiary claims
//! matured positions and harvests yield, and the emergency role can drain
//! and permanently freeze the instance.

mod admin;
mod auth;
mod delegation;
mod emergency;
mod engine;
mod errors;
mod events;
mod interfaces;
mod ledger;
mod rewards;
mod storage;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

use admin::Admin;
use delegation::DelegationForwarder;
use emergency::EmergencyExit;
use engine::ClaimEngine;
use ledger::VestingLedger;
use rewards::{ProofGatedClaimer, RewardHarvester};

pub use auth::{EMERGENCY_ROLE, MANAGER_ROLE};
pub use errors::VaultError;
pub use interfaces::{
    DelegateRegistryClient, RewardRegistryClient, RoleOracleClient, YieldSourceClient,
};
pub use ledger::VestingPosition;
pub use storage::VaultConfig;

/// Lock applied by `deposit` when no duration is given: 365 days.
pub const DEFAULT_LOCK_DURATION: u64 = 365 * 24 * 60 * 60;

#[contract]
pub struct VestingVault;

#[contractimpl]
impl VestingVault {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    pub fn __constructor(env: Env, beneficiary: Address, config: VaultConfig) {
        storage::write_config(&env, &config);
        storage::write_beneficiary(&env, &beneficiary);
        VestingLedger::init(&env);
        storage::bump_instance(&env);

        DelegationForwarder::register_default(&env, &config);
    }

    // -----------------------------------------------------------------------
    // Vesting
    // -----------------------------------------------------------------------

    /// Deposits `amount` under the default one-year lock. Returns the nonce.
    pub fn deposit(env: Env, caller: Address, amount: i128) -> Result<u64, VaultError> {
        storage::bump_instance(&env);
        ClaimEngine::deposit(&env, &caller, amount, DEFAULT_LOCK_DURATION)
    }

    /// Deposits `amount` locked for `lock_duration` seconds. Returns the nonce.
    pub fn deposit_with_lock(
        env: Env,
        caller: Address,
        amount: i128,
        lock_duration: u64,
    ) -> Result<u64, VaultError> {
        storage::bump_instance(&env);
        ClaimEngine::deposit(&env, &caller, amount, lock_duration)
    }

    pub fn claim(env: Env, caller: Address, nonce: u64) -> Result<i128, VaultError> {
        storage::bump_instance(&env);
        ClaimEngine::claim(&env, &caller, nonce)
    }

    // -----------------------------------------------------------------------
    // Rewards
    // -----------------------------------------------------------------------

    pub fn claim_rewards(env: Env, caller: Address) -> Result<i128, VaultError> {
        storage::bump_instance(&env);
        RewardHarvester::harvest_rewards(&env, &caller)
    }

    pub fn claim_proof_gated_reward(
        env: Env,
        caller: Address,
        asset: Address,
        index: u32,
        amount: i128,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), VaultError> {
        storage::bump_instance(&env);
        ProofGatedClaimer::claim(&env, &caller, &asset, index, amount, &proof)
    }

    // -----------------------------------------------------------------------
    // Administration
    // -----------------------------------------------------------------------

    pub fn sweep(
        env: Env,
        caller: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), VaultError> {
        storage::bump_instance(&env);
        Admin::sweep(&env, &caller, &asset, amount, &to)
    }

    pub fn ragequit(env: Env, caller: Address, to: Address) -> Result<i128, VaultError> {
        storage::bump_instance(&env);
        EmergencyExit::ragequit(&env, &caller, &to)
    }

    pub fn set_beneficiary(
        env: Env,
        caller: Address,
        new_beneficiary: Address,
    ) -> Result<(), VaultError> {
        storage::bump_instance(&env);
        Admin::set_beneficiary(&env, &caller, &new_beneficiary)
    }

    pub fn update_delegation(env: Env, caller: Address, delegate: Address) -> Result<(), VaultError> {
        storage::bump_instance(&env);
        DelegationForwarder::update(&env, &caller, &delegate)
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    /// Nonce the next deposit will receive; equals the number of positions.
    pub fn get_vesting_nonce(env: Env) -> u64 {
        VestingLedger::next_nonce(&env)
    }

    pub fn get_vesting_position(env: Env, nonce: u64) -> Option<VestingPosition> {
        VestingLedger::read(&env, nonce)
    }

    pub fn beneficiary(env: Env) -> Address {
        storage::read_beneficiary(&env)
    }

    pub fn is_frozen(env: Env) -> bool {
        storage::is_frozen(&env)
    }

    pub fn config(env: Env) -> VaultConfig {
        storage::read_config(&env)
    }
}
