//! Calls out to the payment and sale token contracts.
//!
//! Failures come back as `ExternalTransferFailed`; returning it from the entry
//! point rolls back the whole invocation.

use crate::errors::Error;
use soroban_sdk::{log, token, Address, Env};

fn to_token_amount(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)
}

pub fn token_decimals(env: &Env, token_address: &Address) -> u32 {
    token::Client::new(env, token_address).decimals()
}

pub fn token_balance(env: &Env, token_address: &Address, id: &Address) -> i128 {
    token::Client::new(env, token_address).balance(id)
}

/// Moves `amount` of the payment token from `from` into this contract.
pub fn pull_payment(
    env: &Env,
    payment_token: &Address,
    from: &Address,
    amount: u128,
) -> Result<(), Error> {
    let amount = to_token_amount(amount)?;
    let client = token::Client::new(env, payment_token);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "payment transfer refused", from.clone(), amount);
            Err(Error::ExternalTransferFailed)
        }
    }
}

/// Mints `amount` of the sale token to `to`. The token only accepts this
/// once its admin (minter) role has been handed to this contract.
pub fn mint_sale_tokens(
    env: &Env,
    sale_token: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), Error> {
    let amount = to_token_amount(amount)?;
    let client = token::StellarAssetClient::new(env, sale_token);
    match client.try_mint(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "sale token mint refused", to.clone(), amount);
            Err(Error::ExternalTransferFailed)
        }
    }
}
