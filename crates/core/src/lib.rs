//! Core double-entry ledger logic for Arca.
//!
//! This crate contains pure business logic with ZERO storage or web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `chart` - Chart of accounts: account types, normal balances, code generation
//! - `journal` - Journal entries: lifecycle, validation, reversal, numbering
//! - `ledger` - General ledger rows and running-balance math
//! - `error` - Error taxonomy for ledger operations

pub mod chart;
pub mod error;
pub mod journal;
pub mod ledger;

pub use error::LedgerError;
