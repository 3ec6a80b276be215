//! `anchorkit-config` - Pre-deployment validator for AnchorKit configuration
//!
//! Checks `.toml` and `.json` deployment configs against a Draft-7 JSON
//! Schema, then applies the contract, attestor-registry, and session rules
//! the schema cannot express.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
