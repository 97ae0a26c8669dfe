#![no_std]

mod collaborators;
pub mod constants;
mod contract;
mod errors;
mod events;
pub mod price;
mod storage;
mod types;
pub mod vesting;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::Error;
pub use events::{DepositedEvent, InitializedEvent, TokensBoundEvent, WithdrawnEvent};
pub use types::{AccountRecord, SaleConfig, TokenPair};
