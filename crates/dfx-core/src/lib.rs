//! # dfx-core
//! Foundation types, constants and traits for the DeFindex revenue calculator.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
