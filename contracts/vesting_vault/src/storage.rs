use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::errors::VaultError;

// ---------------------------------------------------------------------------
// TTL management
// ---------------------------------------------------------------------------
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const LEDGER_CLOSE_SECONDS: u64 = 5;

// A position lives until its lock ends plus this grace period, capped at the
// network's maximum TTL.
pub(crate) const POSITION_GRACE_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;

/// Ledgers expected to close before `timestamp`, zero if it has passed.
pub(crate) fn ledgers_until(env: &Env, timestamp: u64) -> u32 {
    let seconds = timestamp.saturating_sub(env.ledger().timestamp());
    u32::try_from(seconds / LEDGER_CLOSE_SECONDS).unwrap_or(u32::MAX)
}

/// Wiring fixed at construction time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// The single custodied (vesting) asset.
    pub asset: Address,
    pub yield_source: Address,
    pub reward_registry: Address,
    pub delegate_registry: Address,
    pub role_oracle: Address,
    /// Governance space the vault delegates in.
    pub delegation_space: Symbol,
    /// Delegate registered when the vault is created.
    pub default_delegate: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Beneficiary,
    Frozen,
    NextNonce,
    /// Persistent: one vesting position per nonce.
    Position(u64),
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn write_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn read_config(env: &Env) -> VaultConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("vault not constructed")
}

pub(crate) fn write_beneficiary(env: &Env, beneficiary: &Address) {
    env.storage().instance().set(&DataKey::Beneficiary, beneficiary);
}

pub(crate) fn read_beneficiary(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Beneficiary)
        .expect("vault not constructed")
}

pub(crate) fn is_frozen(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Frozen)
        .unwrap_or(false)
}

/// One-way Active -> Frozen transition. Nothing writes `false` afterwards.
pub(crate) fn freeze(env: &Env) {
    env.storage().instance().set(&DataKey::Frozen, &true);
}

/// Top-of-operation guard for every state-mutating vault entry point
/// that the freeze disables.
pub(crate) fn require_active(env: &Env) -> Result<(), VaultError> {
    if is_frozen(env) {
        return Err(VaultError::Frozen);
    }
    Ok(())
}
