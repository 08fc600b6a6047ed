//! Shared types and configuration for Arca.
//!
//! This crate provides common types used across the ledger crates:
//! - Typed IDs for type-safe entity references
//! - Ledger configuration management

pub mod config;
pub mod types;

pub use config::LedgerConfig;
