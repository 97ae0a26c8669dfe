#![allow(dead_code)]

use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};
use token_sale::{TokenSaleContract, TokenSaleContractClient};

pub const MONTH: u64 = 30 * 24 * 60 * 60;
pub const USD: i128 = 1_000_000; // 6 decimals
pub const TST: u128 = 1_000_000_000_000_000_000; // 18 decimals

#[contracttype]
enum MockKey {
    Decimals,
    Minter,
    Balance(Address),
}

/// Minimal token with configurable decimals and a single minter.
#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn setup(env: Env, decimals: u32, minter: Address) {
        env.storage().instance().set(&MockKey::Decimals, &decimals);
        env.storage().instance().set(&MockKey::Minter, &minter);
    }

    pub fn set_minter(env: Env, minter: Address) {
        let current: Address = env.storage().instance().get(&MockKey::Minter).unwrap();
        current.require_auth();
        env.storage().instance().set(&MockKey::Minter, &minter);
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&MockKey::Decimals).unwrap()
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&MockKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        let minter: Address = env.storage().instance().get(&MockKey::Minter).unwrap();
        minter.require_auth();
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&MockKey::Balance(to), &(balance + amount));
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&MockKey::Balance(from), &(from_balance - amount));
        env.storage()
            .persistent()
            .set(&MockKey::Balance(to), &(to_balance + amount));
    }
}

pub struct IcoTest<'a> {
    pub env: &'a Env,
    pub sale: TokenSaleContractClient<'a>,
    pub sale_id: Address,
    pub usd: MockTokenClient<'a>,
    pub tst: MockTokenClient<'a>,
    pub owner: Address,
    pub buy_start: u64,
    pub claim_start: u64,
}

/// USD (6 decimals) buys TST (18 decimals). The sale holds the TST minter
/// role and is configured with a one hour buy window.
pub fn setup_ico(env: &Env) -> IcoTest<'_> {
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = 1_700_000_000;
    });

    let owner = Address::generate(env);

    let usd_id = env.register_contract(None, MockToken);
    let usd = MockTokenClient::new(env, &usd_id);
    usd.setup(&6, &owner);

    let tst_id = env.register_contract(None, MockToken);
    let tst = MockTokenClient::new(env, &tst_id);
    tst.setup(&18, &owner);

    let sale_id = env.register_contract(None, TokenSaleContract);
    let sale = TokenSaleContractClient::new(env, &sale_id);
    sale.initialize(&owner, &tst_id, &usd_id);

    let now = env.ledger().timestamp();
    let buy_start = now + 1;
    let claim_start = now + 3_600;
    sale.configure(&buy_start, &claim_start);

    tst.set_minter(&sale_id);

    IcoTest {
        env,
        sale,
        sale_id,
        usd,
        tst,
        owner,
        buy_start,
        claim_start,
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}

/// `usd * 10^18 / (10^6 * 2)`
pub fn tst_for_usd(usd: i128) -> u128 {
    (usd as u128) * TST / (USD as u128 * 2)
}
