//! Tranche release schedule measured from the claim window start.

use crate::constants::{MONTH, TENTHS};
use crate::errors::Error;
use crate::types::AccountRecord;

/// Unlocked share in tenths after `elapsed` seconds of the claim window.
/// Tranche boundaries are inclusive: exactly one month unlocks 1/10.
pub fn unlocked_tenths(elapsed: u64) -> u128 {
    match elapsed / MONTH {
        0 => 0,
        1 => 1,
        2 => 3,
        3 => 5,
        _ => TENTHS,
    }
}

/// Seconds since the claim window opened, or `None` before it.
pub fn elapsed_since(now: u64, claim_start: u64) -> Option<u64> {
    now.checked_sub(claim_start)
}

/// `floor(purchased * fraction)` for the tranche reached at `elapsed`.
pub fn entitled(purchased: u128, elapsed: u64) -> Result<u128, Error> {
    let scaled = purchased
        .checked_mul(unlocked_tenths(elapsed))
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(scaled / TENTHS)
}

/// Amount still owed to `record` at `now`. Zero before the claim window.
pub fn payable(record: &AccountRecord, now: u64, claim_start: u64) -> Result<u128, Error> {
    let Some(elapsed) = elapsed_since(now, claim_start) else {
        return Ok(0);
    };
    Ok(entitled(record.purchased, elapsed)?.saturating_sub(record.withdrawn))
}
