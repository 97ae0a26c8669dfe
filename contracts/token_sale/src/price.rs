//! Fixed-price conversion between the payment token and the sale token.

use crate::constants::{FIXED_PRICE, MAX_CAP_UNITS, MIN_CAP_UNITS};
use crate::errors::Error;

/// `10^decimals`, the raw size of one whole token.
pub fn unit(decimals: u32) -> Result<u128, Error> {
    10u128
        .checked_pow(decimals)
        .ok_or(Error::ArithmeticOverflow)
}

/// Sale-token amount bought by `payment_amount`, truncated toward zero.
///
/// `payment_amount * 10^sale_decimals / (10^payment_decimals * FIXED_PRICE)`,
/// with the multiplication done before the single division.
pub fn convert(
    payment_amount: u128,
    payment_decimals: u32,
    sale_decimals: u32,
) -> Result<u128, Error> {
    let numerator = payment_amount
        .checked_mul(unit(sale_decimals)?)
        .ok_or(Error::ArithmeticOverflow)?;
    let denominator = unit(payment_decimals)?
        .checked_mul(FIXED_PRICE)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(numerator / denominator)
}

/// Inclusive `(min, max)` holding bounds at the sale token's scale.
pub fn purchase_bounds(sale_decimals: u32) -> Result<(u128, u128), Error> {
    let one = unit(sale_decimals)?;
    let min = MIN_CAP_UNITS
        .checked_mul(one)
        .ok_or(Error::ArithmeticOverflow)?;
    let max = MAX_CAP_UNITS
        .checked_mul(one)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok((min, max))
}
