use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotConfigured = 3,
    InvalidWindow = 4,
    BuyNotStarted = 5,
    BuyEnded = 6,
    ZeroAmount = 7,
    PurchaseOutOfBounds = 8,
    NothingPurchased = 9,
    ExternalTransferFailed = 10,
    ArithmeticOverflow = 11,
}
