/// Payment-token units (at payment decimals) paid per sale-token unit.
pub const FIXED_PRICE: u128 = 2;

/// Per-account holding bounds, in whole sale-token units.
pub const MIN_CAP_UNITS: u128 = 10;
pub const MAX_CAP_UNITS: u128 = 100;

pub const MONTH: u64 = 30 * 24 * 60 * 60;

pub const TENTHS: u128 = 10;

// ~5s ledger close time
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const TTL_EXTEND_TO: u32 = 180 * DAY_IN_LEDGERS;
