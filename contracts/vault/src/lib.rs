#![no_std]

pub mod contract;
pub mod error;
mod event;
pub mod non_fungible;
mod open_set;
mod requests;
mod roles;
mod storage_types;
pub mod types;

pub use contract::{Vault, VaultClient};
