use soroban_sdk::{contracttype, Address, Env, Symbol};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokensBoundEvent {
    pub admin: Address,
    pub sale_token: Address,
    pub payment_token: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct InitializedEvent {
    pub buy_start: u64,
    pub claim_start: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositedEvent {
    pub account: Address,
    pub paid: u128,
    pub received: u128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WithdrawnEvent {
    pub account: Address,
    pub amount: u128,
}

pub fn emit_tokens_bound(env: &Env, admin: Address, sale_token: Address, payment_token: Address) {
    let event = TokensBoundEvent {
        admin,
        sale_token,
        payment_token,
    };
    env.events()
        .publish((Symbol::new(env, "TokensBound"),), event);
}

pub fn emit_initialized(env: &Env, buy_start: u64, claim_start: u64) {
    let event = InitializedEvent {
        buy_start,
        claim_start,
    };
    env.events()
        .publish((Symbol::new(env, "Initialized"),), event);
}

pub fn emit_deposited(env: &Env, account: Address, paid: u128, received: u128) {
    let event = DepositedEvent {
        account,
        paid,
        received,
    };
    env.events()
        .publish((Symbol::new(env, "Deposited"),), event);
}

pub fn emit_withdrawn(env: &Env, account: Address, amount: u128) {
    let event = WithdrawnEvent { account, amount };
    env.events()
        .publish((Symbol::new(env, "Withdrawn"),), event);
}
