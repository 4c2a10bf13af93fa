//! Client interfaces for the contracts the vault talks to.
//!
//! None of these are owned by the vault. The custodied asset itself is
//! reached through the standard `soroban_sdk::token` interface.

use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol, Vec};

use crate::errors::VaultError;

/// Role membership store consulted for manager and emergency checks.
#[contractclient(name = "RoleOracleClient")]
pub trait RoleOracle {
    fn has_role(env: Env, role: Symbol, account: Address) -> bool;
}

/// Source of the yield that accrues on the custodied asset.
#[contractclient(name = "YieldSourceClient")]
pub trait YieldSource {
    /// Pays everything accrued for `holder` to `recipient`, returning the amount.
    fn harvest_to(env: Env, holder: Address, recipient: Address) -> i128;
}

/// Registry of proof-gated one-time allocations, tracked per asset and index.
#[contractclient(name = "RewardRegistryClient")]
pub trait RewardRegistry {
    fn root_for(env: Env, asset: Address) -> Option<BytesN<32>>;

    fn is_claimed(env: Env, asset: Address, index: u32) -> bool;

    fn claim(
        env: Env,
        asset: Address,
        index: u32,
        recipient: Address,
        amount: i128,
        proof: Vec<BytesN<32>>,
    );
}

/// Governance delegation registry, keyed by delegator and space.
#[contractclient(name = "DelegateRegistryClient")]
pub trait DelegateRegistry {
    fn set_delegate(env: Env, delegator: Address, space: Symbol, delegate: Address);

    fn clear_delegate(env: Env, delegator: Address, space: Symbol);
}

/// Collapses the result of a `try_` client call into the vault's taxonomy.
///
/// Both an aborted callee and a return value that fails to decode count as
/// a failed external call.
pub(crate) fn settle<T, C, I>(outcome: Result<Result<T, C>, I>) -> Result<T, VaultError> {
    match outcome {
        Ok(Ok(value)) => Ok(value),
        _ => Err(VaultError::TransferFailed),
    }
}
