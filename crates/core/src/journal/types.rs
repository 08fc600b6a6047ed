//! Input contracts for creating and editing journal entries.

use arca_shared::types::{AccountId, TenantId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::{EntrySource, JournalEntryType};

/// Input for a single journal line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineInput {
    /// The account to post to.
    pub account_id: AccountId,
    /// Optional line description.
    pub description: Option<String>,
    /// Debit amount (zero if this is a credit line).
    pub debit_amount: Decimal,
    /// Credit amount (zero if this is a debit line).
    pub credit_amount: Decimal,
    /// Optional line reference.
    pub reference: Option<String>,
}

impl LineInput {
    /// A pure debit line.
    #[must_use]
    pub fn debit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            description: None,
            debit_amount: amount,
            credit_amount: Decimal::ZERO,
            reference: None,
        }
    }

    /// A pure credit line.
    #[must_use]
    pub fn credit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            description: None,
            debit_amount: Decimal::ZERO,
            credit_amount: amount,
            reference: None,
        }
    }
}

/// Input for creating a journal entry.
#[derive(Debug, Clone)]
pub struct CreateEntryInput {
    /// The tenant this entry belongs to.
    pub tenant_id: TenantId,
    /// Accounting date of the entry.
    pub entry_date: NaiveDate,
    /// Optional reference (e.g. invoice number).
    pub reference: Option<String>,
    /// Entry description.
    pub description: String,
    /// Entry type classification.
    pub entry_type: JournalEntryType,
    /// Originating business document.
    pub source: EntrySource,
    /// The lines (at least one).
    pub lines: Vec<LineInput>,
    /// The user creating the entry.
    pub created_by: UserId,
}

/// Changes to apply to a draft journal entry.
///
/// `None` leaves a field untouched; the double-`Option` on `reference`
/// distinguishes "leave as is" from "clear".
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    /// New accounting date.
    pub entry_date: Option<NaiveDate>,
    /// New reference.
    pub reference: Option<Option<String>>,
    /// New description.
    pub description: Option<String>,
    /// Replacement lines (totals are recomputed).
    pub lines: Option<Vec<LineInput>>,
}
