//! Error taxonomy for ledger operations.
//!
//! Every variant is a business-rule violation surfaced synchronously to the
//! caller. The core never retries or logs-and-continues; the host application
//! translates these into user-facing messages.

use arca_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::journal::JournalStatus;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Journal entry debit and credit totals differ beyond tolerance.
    #[error("Journal entry is not balanced. Debit: {debit}, Credit: {credit}")]
    ImbalancedEntry {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// A postable journal entry must have at least 2 lines.
    #[error("Journal entry must have at least 2 lines to post")]
    InsufficientLines,

    /// A journal entry must have at least one line.
    #[error("Journal entry must have at least one line")]
    NoLines,

    /// Line amounts cannot be negative.
    #[error("Line amounts cannot be negative")]
    NegativeAmount,

    /// A line must carry a debit or a credit, not both.
    #[error("Line must carry either a debit or a credit amount, not both")]
    LineBothSides,

    // ========== Account Errors ==========
    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account is inactive and cannot be posted to.
    #[error("Account {0} is inactive")]
    AccountInactive(AccountId),

    /// Account is a parent or does not accept entries.
    #[error("Account {0} does not accept journal lines")]
    AccountLocked(AccountId),

    /// Account code already exists within the tenant.
    #[error("Account code '{0}' already exists")]
    DuplicateCode(String),

    /// Parent account not found.
    #[error("Parent account not found: {0}")]
    ParentNotFound(AccountId),

    /// Parent account belongs to a different tenant.
    #[error("Parent account belongs to a different tenant")]
    ParentTenantMismatch,

    /// Account has ledger history or child accounts and cannot be deleted.
    #[error("Cannot delete account {0}: it has ledger history or child accounts")]
    AccountDeletion(AccountId),

    // ========== Entry State Errors ==========
    /// The requested lifecycle transition is not allowed from the current status.
    #[error("Cannot {operation} a {status:?} journal entry")]
    InvalidStateTransition {
        /// The operation that was attempted (e.g. "edit", "post", "reverse").
        operation: &'static str,
        /// The entry's current status.
        status: JournalStatus,
    },

    /// Journal entry not found.
    #[error("Journal entry not found: {0}")]
    EntryNotFound(JournalEntryId),
}

impl LedgerError {
    /// Returns the error code for host-application responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ImbalancedEntry { .. } => "IMBALANCED_ENTRY",
            Self::InsufficientLines => "INSUFFICIENT_LINES",
            Self::NoLines => "NO_LINES",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::LineBothSides => "LINE_BOTH_SIDES",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
            Self::AccountLocked(_) => "ACCOUNT_LOCKED",
            Self::DuplicateCode(_) => "DUPLICATE_CODE",
            Self::ParentNotFound(_) => "PARENT_NOT_FOUND",
            Self::ParentTenantMismatch => "PARENT_TENANT_MISMATCH",
            Self::AccountDeletion(_) => "ACCOUNT_DELETION",
            Self::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
        }
    }
}
