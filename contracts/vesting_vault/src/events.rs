use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) const POSITION_CREATED: Symbol = symbol_short!("created");
pub(crate) const CLAIMED: Symbol = symbol_short!("claimed");
pub(crate) const BENEFICIARY_CHANGED: Symbol = symbol_short!("benef");
pub(crate) const RAGEQUIT: Symbol = symbol_short!("ragequit");
pub(crate) const SWEPT: Symbol = symbol_short!("swept");
pub(crate) const REWARD_FORWARDED: Symbol = symbol_short!("reward");
pub(crate) const DELEGATION_UPDATED: Symbol = symbol_short!("delegate");

pub(crate) fn position_created(env: &Env, nonce: u64, amount: i128, vesting_ends: u64) {
    env.events()
        .publish((POSITION_CREATED, nonce), (amount, vesting_ends));
}

pub(crate) fn claimed(env: &Env, nonce: u64, amount: i128) {
    env.events().publish((CLAIMED, nonce), amount);
}

pub(crate) fn beneficiary_changed(env: &Env, old: Address, new: Address) {
    env.events().publish((BENEFICIARY_CHANGED,), (old, new));
}

pub(crate) fn ragequit(env: &Env, to: Address, drained: i128) {
    env.events().publish((RAGEQUIT, to), drained);
}

pub(crate) fn swept(env: &Env, asset: Address, to: Address, amount: i128) {
    env.events().publish((SWEPT, asset), (to, amount));
}

pub(crate) fn reward_forwarded(env: &Env, asset: Address, index: u32, amount: i128) {
    env.events().publish((REWARD_FORWARDED, asset), (index, amount));
}

pub(crate) fn delegation_updated(env: &Env, delegate: Address) {
    env.events().publish((DELEGATION_UPDATED,), delegate);
}
