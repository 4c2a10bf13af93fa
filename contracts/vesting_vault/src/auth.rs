use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::VaultError;
use crate::interfaces::RoleOracleClient;
use crate::storage;

/// Role allowed to deposit, sweep stray assets and reconfigure the vault.
pub const MANAGER_ROLE: Symbol = symbol_short!("MANAGER");
/// Role allowed to drain and freeze the vault.
pub const EMERGENCY_ROLE: Symbol = symbol_short!("EMERGENCY");

/// Requires `caller`'s signature and membership of `role` in the external
/// role oracle. Membership is queried on every call, never cached.
pub(crate) fn require_role(env: &Env, caller: &Address, role: &Symbol) -> Result<(), VaultError> {
    caller.require_auth();

    let oracle = storage::read_config(env).role_oracle;
    if RoleOracleClient::new(env, &oracle).has_role(role, caller) {
        return Ok(());
    }

    if *role == EMERGENCY_ROLE {
        Err(VaultError::UnauthorizedEmergency)
    } else {
        Err(VaultError::UnauthorizedManager)
    }
}

/// The beneficiary is checked against local state, not the oracle.
pub(crate) fn require_beneficiary(env: &Env, caller: &Address) -> Result<(), VaultError> {
    caller.require_auth();

    if *caller != storage::read_beneficiary(env) {
        return Err(VaultError::UnauthorizedBeneficiary);
    }
    Ok(())
}
