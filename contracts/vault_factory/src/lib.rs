#![no_std]

//! Deploys one `VestingVault` per beneficiary from a stored WASM hash.
//!
//! Every vault gets the same collaborator wiring; only the beneficiary
//! differs. Vault addresses are derived from the beneficiary, so they can be
//! predicted before deployment.

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, log, symbol_short,
    xdr::ToXdr, Address, BytesN, Env, Symbol, Vec,
};

contractmeta!(
    key = "Description",
    val = "Factory deploying per-beneficiary vesting vaults"
);

const VAULT_CREATED: Symbol = symbol_short!("vault");

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    /// The beneficiary already has a vault.
    VaultExists = 1,
}

/// Constructor argument of every deployed vault. Mirrors the vault's own
/// `VaultConfig` field for field.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    pub asset: Address,
    pub yield_source: Address,
    pub reward_registry: Address,
    pub delegate_registry: Address,
    pub role_oracle: Address,
    pub delegation_space: Symbol,
    pub default_delegate: Address,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Admin,
    WasmHash,
    Defaults,
    Vaults,
    VaultOf(Address),
}

#[contract]
pub struct VaultFactory;

#[contractimpl]
impl VaultFactory {
    pub fn __constructor(env: Env, admin: Address, wasm_hash: BytesN<32>, defaults: VaultConfig) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::WasmHash, &wasm_hash);
        env.storage().instance().set(&DataKey::Defaults, &defaults);
        env.storage()
            .instance()
            .set(&DataKey::Vaults, &Vec::<Address>::new(&env));
    }

    /// Deploys and constructs the vault for `beneficiary`. The vault
    /// registers its default delegate during construction.
    pub fn create_vault(env: Env, beneficiary: Address) -> Result<Address, FactoryError> {
        Self::admin(env.clone()).require_auth();
        Self::bump(&env);

        let key = DataKey::VaultOf(beneficiary.clone());
        if env.storage().persistent().has(&key) {
            return Err(FactoryError::VaultExists);
        }

        let wasm_hash: BytesN<32> = env.storage().instance().get(&DataKey::WasmHash).unwrap();
        let defaults = Self::defaults(env.clone());

        let vault = env
            .deployer()
            .with_current_contract(Self::salt(&env, &beneficiary))
            .deploy_v2(wasm_hash, (beneficiary.clone(), defaults));

        env.storage().persistent().set(&key, &vault);
        env.storage()
            .persistent()
            .extend_ttl(&key, INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        let mut vaults = Self::vaults(env.clone());
        vaults.push_back(vault.clone());
        env.storage().instance().set(&DataKey::Vaults, &vaults);

        log!(&env, "vault deployed for {}", beneficiary);
        env.events()
            .publish((VAULT_CREATED, beneficiary), vault.clone());

        Ok(vault)
    }

    /// Address `create_vault` will deploy to for `beneficiary`.
    pub fn predict_vault(env: Env, beneficiary: Address) -> Address {
        env.deployer()
            .with_current_contract(Self::salt(&env, &beneficiary))
            .deployed_address()
    }

    pub fn vault_of(env: Env, beneficiary: Address) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::VaultOf(beneficiary))
    }

    pub fn vaults(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Vaults)
            .unwrap_or_else(|| Vec::new(&env))
    }

    /// Affects vaults created afterwards only.
    pub fn update_wasm_hash(env: Env, wasm_hash: BytesN<32>) {
        Self::admin(env.clone()).require_auth();
        env.storage().instance().set(&DataKey::WasmHash, &wasm_hash);
    }

    pub fn wasm_hash(env: Env) -> BytesN<32> {
        env.storage().instance().get(&DataKey::WasmHash).unwrap()
    }

    pub fn defaults(env: Env) -> VaultConfig {
        env.storage().instance().get(&DataKey::Defaults).unwrap()
    }

    pub fn admin(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Admin).unwrap()
    }

    fn salt(env: &Env, beneficiary: &Address) -> BytesN<32> {
        env.crypto()
            .sha256(&beneficiary.clone().to_xdr(env))
            .to_bytes()
    }

    fn bump(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
