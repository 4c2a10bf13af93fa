use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::auth::{self, EMERGENCY_ROLE};
use crate::delegation::DelegationForwarder;
use crate::errors::VaultError;
use crate::events;
use crate::interfaces::settle;
use crate::rewards::RewardHarvester;
use crate::storage;

pub struct EmergencyExit;

impl EmergencyExit {
    /// Harvests to `to`, moves the whole custodied balance to `to`, freezes
    /// the vault for good and drops its delegation.
    ///
    /// The drain ignores the ledger: positions stay unconsumed but can never
    /// be claimed again. Returns the amount of custodied asset moved.
    pub fn ragequit(env: &Env, caller: &Address, to: &Address) -> Result<i128, VaultError> {
        auth::require_role(env, caller, &EMERGENCY_ROLE)?;

        let vault = env.current_contract_address();
        if *to == vault {
            return Err(VaultError::InvalidDestination);
        }

        // Freeze before any external call can observe the vault.
        storage::freeze(env);

        let config = storage::read_config(env);
        RewardHarvester::harvest_to(env, &config, to)?;

        let token = TokenClient::new(env, &config.asset);
        let balance = settle(token.try_balance(&vault))?;
        if balance > 0 {
            settle(token.try_transfer(&vault, to, &balance))?;
        }

        DelegationForwarder::clear(env, &config)?;

        log!(env, "ragequit: drained={}", balance);
        events::ragequit(env, to.clone(), balance);

        Ok(balance)
    }
}
