use soroban_sdk::{contracttype, Address, Env};

/// Sale windows. Present in storage only once `configure` succeeded.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub buy_start: u64,   // first second buying is allowed
    pub claim_start: u64, // buying closes, vesting starts accruing
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AccountRecord {
    pub purchased: u128, // sale-token entitlement
    pub withdrawn: u128, // sale tokens already minted out
}

impl AccountRecord {
    pub fn empty() -> Self {
        AccountRecord {
            purchased: 0,
            withdrawn: 0,
        }
    }
}

/// Token collaborators bound at deployment, with decimals captured once.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenPair {
    pub sale_token: Address,
    pub payment_token: Address,
    pub sale_decimals: u32,
    pub payment_decimals: u32,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Tokens,
    Config,
    Account(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
