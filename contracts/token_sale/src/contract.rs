use crate::collaborators::{mint_sale_tokens, pull_payment, token_balance, token_decimals};
use crate::errors::Error;
use crate::events::{emit_deposited, emit_initialized, emit_tokens_bound, emit_withdrawn};
use crate::price;
use crate::storage::*;
use crate::types::*;
use crate::vesting;
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Fixed-price token sale with tranche vesting"
);

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Bind the sale to its admin and token pair. Decimals of both tokens are
    /// read here and never re-queried.
    pub fn initialize(
        env: Env,
        admin: Address,
        sale_token: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        let tokens = TokenPair {
            sale_decimals: token_decimals(&env, &sale_token),
            payment_decimals: token_decimals(&env, &payment_token),
            sale_token: sale_token.clone(),
            payment_token: payment_token.clone(),
        };

        set_admin(&env, &admin);
        set_tokens(&env, &tokens);
        bump_instance(&env);

        emit_tokens_bound(&env, admin, sale_token, payment_token);
        Ok(())
    }

    /// Set the buy and claim windows. One-shot.
    pub fn configure(env: Env, buy_start: u64, claim_start: u64) -> Result<(), Error> {
        let admin = get_admin(&env).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        if get_config(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        if claim_start <= buy_start {
            return Err(Error::InvalidWindow);
        }

        set_config(
            &env,
            &SaleConfig {
                buy_start,
                claim_start,
            },
        );
        bump_instance(&env);

        emit_initialized(&env, buy_start, claim_start);
        Ok(())
    }

    /// Pay `payment_amount` of the payment token for sale-token entitlement.
    /// Returns the entitlement added by this purchase.
    pub fn buy(env: Env, buyer: Address, payment_amount: u128) -> Result<u128, Error> {
        buyer.require_auth();

        let config = get_config(&env).ok_or(Error::NotConfigured)?;
        let now = get_ledger_timestamp(&env);

        if now < config.buy_start {
            log!(&env, "buy before window", now, config.buy_start);
            return Err(Error::BuyNotStarted);
        }
        if now >= config.claim_start {
            log!(&env, "buy after window", now, config.claim_start);
            return Err(Error::BuyEnded);
        }
        if payment_amount == 0 {
            return Err(Error::ZeroAmount);
        }

        let tokens = get_tokens(&env).ok_or(Error::NotInitialized)?;
        // An amount too large to convert or accumulate is far past the cap.
        let received = price::convert(
            payment_amount,
            tokens.payment_decimals,
            tokens.sale_decimals,
        )
        .map_err(|_| Error::PurchaseOutOfBounds)?;

        let mut record = get_account(&env, &buyer).unwrap_or(AccountRecord::empty());
        let purchased = record
            .purchased
            .checked_add(received)
            .ok_or(Error::PurchaseOutOfBounds)?;

        let (min_cap, max_cap) = price::purchase_bounds(tokens.sale_decimals)?;
        if purchased < min_cap || purchased > max_cap {
            log!(&env, "purchase out of bounds", buyer, purchased);
            return Err(Error::PurchaseOutOfBounds);
        }

        // All checks passed; the transfer and the ledger write commit together.
        pull_payment(&env, &tokens.payment_token, &buyer, payment_amount)?;

        record.purchased = purchased;
        set_account(&env, &buyer, &record);
        bump_instance(&env);

        emit_deposited(&env, buyer, payment_amount, received);
        Ok(received)
    }

    /// Mint whatever has vested for `claimer` and not yet been paid out.
    /// Returns the amount minted, zero when nothing new is unlocked.
    pub fn withdraw(env: Env, claimer: Address) -> Result<u128, Error> {
        claimer.require_auth();

        let config = get_config(&env).ok_or(Error::NotConfigured)?;
        let mut record = get_account(&env, &claimer).ok_or(Error::NothingPurchased)?;
        if record.purchased == 0 {
            return Err(Error::NothingPurchased);
        }

        let now = get_ledger_timestamp(&env);
        let payable = vesting::payable(&record, now, config.claim_start)?;
        if payable == 0 {
            log!(&env, "nothing to withdraw", claimer, now);
            return Ok(0);
        }

        let tokens = get_tokens(&env).ok_or(Error::NotInitialized)?;
        mint_sale_tokens(&env, &tokens.sale_token, &claimer, payable)?;

        record.withdrawn = record
            .withdrawn
            .checked_add(payable)
            .ok_or(Error::ArithmeticOverflow)?;
        set_account(&env, &claimer, &record);
        bump_instance(&env);

        emit_withdrawn(&env, claimer, payable);
        Ok(payable)
    }

    // View functions
    pub fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn sale_token(env: Env) -> Result<Address, Error> {
        Ok(get_tokens(&env).ok_or(Error::NotInitialized)?.sale_token)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        Ok(get_tokens(&env).ok_or(Error::NotInitialized)?.payment_token)
    }

    pub fn is_configured(env: Env) -> bool {
        get_config(&env).is_some()
    }

    pub fn config(env: Env) -> Option<SaleConfig> {
        get_config(&env)
    }

    pub fn account(env: Env, user: Address) -> Option<AccountRecord> {
        get_account(&env, &user)
    }

    /// What `withdraw` would mint for `user` right now.
    pub fn claimable(env: Env, user: Address) -> Result<u128, Error> {
        let config = get_config(&env).ok_or(Error::NotConfigured)?;
        match get_account(&env, &user) {
            Some(record) => {
                vesting::payable(&record, get_ledger_timestamp(&env), config.claim_start)
            }
            None => Ok(0),
        }
    }

    /// Sale-token amount a payment of `payment_amount` would buy.
    pub fn convert_preview(env: Env, payment_amount: u128) -> Result<u128, Error> {
        let tokens = get_tokens(&env).ok_or(Error::NotInitialized)?;
        price::convert(
            payment_amount,
            tokens.payment_decimals,
            tokens.sale_decimals,
        )
    }

    /// Payment tokens held in custody by the sale.
    pub fn raised(env: Env) -> Result<i128, Error> {
        let tokens = get_tokens(&env).ok_or(Error::NotInitialized)?;
        Ok(token_balance(
            &env,
            &tokens.payment_token,
            &env.current_contract_address(),
        ))
    }
}
