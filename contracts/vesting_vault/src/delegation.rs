use soroban_sdk::{Address, Env};

use crate::auth::{self, MANAGER_ROLE};
use crate::errors::VaultError;
use crate::events;
use crate::interfaces::{settle, DelegateRegistryClient};
use crate::storage::{self, VaultConfig};

/// Stateless pass-through to the delegation registry. The vault is always
/// the delegator; the space comes from its config.
pub struct DelegationForwarder;

impl DelegationForwarder {
    /// Registers the configured default delegate. Runs once, at construction.
    pub(crate) fn register_default(env: &Env, config: &VaultConfig) {
        DelegateRegistryClient::new(env, &config.delegate_registry).set_delegate(
            &env.current_contract_address(),
            &config.delegation_space,
            &config.default_delegate,
        );
    }

    pub fn update(env: &Env, caller: &Address, delegate: &Address) -> Result<(), VaultError> {
        auth::require_role(env, caller, &MANAGER_ROLE)?;

        let config = storage::read_config(env);
        settle(
            DelegateRegistryClient::new(env, &config.delegate_registry).try_set_delegate(
                &env.current_contract_address(),
                &config.delegation_space,
                delegate,
            ),
        )?;

        events::delegation_updated(env, delegate.clone());
        Ok(())
    }

    pub(crate) fn clear(env: &Env, config: &VaultConfig) -> Result<(), VaultError> {
        settle(
            DelegateRegistryClient::new(env, &config.delegate_registry)
                .try_clear_delegate(&env.current_contract_address(), &config.delegation_space),
        )
    }
}
