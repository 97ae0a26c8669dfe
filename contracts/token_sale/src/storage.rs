use crate::constants::{TTL_EXTEND_TO, TTL_THRESHOLD};
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_tokens(env: &Env) -> Option<TokenPair> {
    env.storage().instance().get(&DataKey::Tokens)
}

pub fn set_tokens(env: &Env, tokens: &TokenPair) {
    env.storage().instance().set(&DataKey::Tokens, tokens);
}

pub fn get_config(env: &Env) -> Option<SaleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_account(env: &Env, user: &Address) -> Option<AccountRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Account(user.clone()))
}

pub fn set_account(env: &Env, user: &Address, record: &AccountRecord) {
    let key = DataKey::Account(user.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
