//! Append-only, nonce-indexed record of the vault's vesting positions.
//!
//! Nonces are dense and start at zero. A position is written once on
//! creation and touched once more when it is consumed; it is never removed.

use soroban_sdk::{contracttype, Env};

use crate::errors::VaultError;
use crate::storage::{self, DataKey, POSITION_GRACE_LEDGERS};

/// One locked deposit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingPosition {
    pub amount: i128,
    /// Ledger timestamp from which the position may be claimed.
    pub vesting_ends: u64,
    pub consumed: bool,
}

pub struct VestingLedger;

impl VestingLedger {
    pub(crate) fn init(env: &Env) {
        env.storage().instance().set(&DataKey::NextNonce, &0u64);
    }

    pub fn next_nonce(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::NextNonce)
            .unwrap_or(0)
    }

    /// Records a new position maturing `lock_duration` seconds after `now`
    /// and returns its nonce.
    pub fn create_position(
        env: &Env,
        amount: i128,
        now: u64,
        lock_duration: u64,
    ) -> Result<(u64, VestingPosition), VaultError> {
        storage::require_active(env)?;

        let nonce = Self::next_nonce(env);
        let position = VestingPosition {
            amount,
            vesting_ends: now.saturating_add(lock_duration),
            consumed: false,
        };

        Self::write(env, nonce, &position);
        env.storage()
            .instance()
            .set(&DataKey::NextNonce, &(nonce + 1));

        Ok((nonce, position))
    }

    /// Pure lookup; an unassigned nonce yields `None`.
    pub fn read(env: &Env, nonce: u64) -> Option<VestingPosition> {
        env.storage().persistent().get(&DataKey::Position(nonce))
    }

    /// Flips `consumed` on a position the caller has already validated.
    pub(crate) fn mark_consumed(env: &Env, nonce: u64, position: &mut VestingPosition) {
        position.consumed = true;
        Self::write(env, nonce, position);
    }

    /// Stores the position and keeps it live until `vesting_ends` plus a
    /// grace period. Locks longer than the network's maximum TTL get the
    /// maximum and must be extended again before they archive.
    fn write(env: &Env, nonce: u64, position: &VestingPosition) {
        let key = DataKey::Position(nonce);
        env.storage().persistent().set(&key, position);

        let extend_to = storage::ledgers_until(env, position.vesting_ends)
            .saturating_add(POSITION_GRACE_LEDGERS)
            .min(env.storage().max_ttl());
        env.storage()
            .persistent()
            .extend_ttl(&key, extend_to, extend_to);
    }
}
