//! Shared fixtures for the DeFindex end-to-end tests.

pub mod helpers;
