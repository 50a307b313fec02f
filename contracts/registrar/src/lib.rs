pub mod contract;
mod error;
pub mod handler;
pub mod query;
pub mod state;
mod token;
mod utils;


#[cfg(test)]
mod multitest;

pub use crate::error::ContractError;
