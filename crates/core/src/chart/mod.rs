//! Chart of accounts domain logic.
//!
//! This module implements the account-side rules of the ledger:
//! - Account types and the debit/credit normal-balance sign convention
//! - The account record owned by the chart
//! - Hierarchical account-code generation and path composition

pub mod account;
pub mod code;

pub use account::{Account, AccountType, NormalBalance};
pub use code::{next_child_code, own_segment, root_code};
