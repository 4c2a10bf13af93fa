//! Yield harvesting and proof-gated reward forwarding.
//!
//! Both paths are independent of the vesting ledger and of each other.

use soroban_sdk::{log, token::TokenClient, Address, BytesN, Env, Vec};

use crate::auth;
use crate::errors::VaultError;
use crate::events;
use crate::interfaces::{settle, RewardRegistryClient, YieldSourceClient};
use crate::storage::{self, VaultConfig};

pub struct RewardHarvester;

impl RewardHarvester {
    /// Beneficiary-triggered harvest. Mutates no vault state.
    pub fn harvest_rewards(env: &Env, caller: &Address) -> Result<i128, VaultError> {
        auth::require_beneficiary(env, caller)?;

        let config = storage::read_config(env);
        let harvested = Self::harvest_to(env, &config, caller)?;

        log!(env, "harvest: amount={}", harvested);
        Ok(harvested)
    }

    /// Asks the yield source to pay everything accrued for this vault
    /// straight to `recipient`.
    pub(crate) fn harvest_to(
        env: &Env,
        config: &VaultConfig,
        recipient: &Address,
    ) -> Result<i128, VaultError> {
        settle(
            YieldSourceClient::new(env, &config.yield_source)
                .try_harvest_to(&env.current_contract_address(), recipient),
        )
    }
}

pub struct ProofGatedClaimer;

impl ProofGatedClaimer {
    /// Pulls allocation `index` of `asset` from the reward registry (unless
    /// the registry already reports it claimed) and forwards `amount` of
    /// `asset` from vault custody to the beneficiary.
    ///
    /// The custodied asset skips the allocation-root check. Combined with a
    /// registry that reports the index as claimed, that lets the beneficiary
    /// forward custodied funds without any proof; see SECURITY.md.
    pub fn claim(
        env: &Env,
        caller: &Address,
        asset: &Address,
        index: u32,
        amount: i128,
        proof: &Vec<BytesN<32>>,
    ) -> Result<(), VaultError> {
        auth::require_beneficiary(env, caller)?;

        let config = storage::read_config(env);
        let registry = RewardRegistryClient::new(env, &config.reward_registry);
        let vault = env.current_contract_address();

        if *asset != config.asset && settle(registry.try_root_for(asset))?.is_none() {
            return Err(VaultError::NoAllocation);
        }

        if settle(registry.try_is_claimed(asset, &index))? {
            log!(env, "proof claim: index {} already pulled, forwarding", index);
        } else {
            settle(registry.try_claim(asset, &index, &vault, &amount, proof))?;
        }

        settle(TokenClient::new(env, asset).try_transfer(&vault, caller, &amount))?;

        events::reward_forwarded(env, asset.clone(), index, amount);
        Ok(())
    }
}
