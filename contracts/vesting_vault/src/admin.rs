use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::auth::{self, MANAGER_ROLE};
use crate::errors::VaultError;
use crate::events;
use crate::interfaces::settle;
use crate::storage;

/// Manager-only housekeeping that never touches the vesting ledger.
pub struct Admin;

impl Admin {
    /// Replaces the beneficiary. Existing positions follow the new holder.
    pub fn set_beneficiary(
        env: &Env,
        caller: &Address,
        new_beneficiary: &Address,
    ) -> Result<(), VaultError> {
        auth::require_role(env, caller, &MANAGER_ROLE)?;

        let old = storage::read_beneficiary(env);
        storage::write_beneficiary(env, new_beneficiary);

        events::beneficiary_changed(env, old, new_beneficiary.clone());
        Ok(())
    }

    /// Recovers assets sent to the vault by mistake. The custodied asset can
    /// only leave through `claim` or `ragequit`.
    pub fn sweep(
        env: &Env,
        caller: &Address,
        asset: &Address,
        amount: i128,
        to: &Address,
    ) -> Result<(), VaultError> {
        auth::require_role(env, caller, &MANAGER_ROLE)?;

        if *asset == storage::read_config(env).asset {
            return Err(VaultError::ProtectedAsset);
        }

        settle(TokenClient::new(env, asset).try_transfer(
            &env.current_contract_address(),
            to,
            &amount,
        ))?;

        log!(env, "sweep: amount={}", amount);
        events::swept(env, asset.clone(), to.clone(), amount);
        Ok(())
    }
}
